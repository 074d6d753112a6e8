/// Generate accessor functions for the global UI signals.
///
/// Usage:
/// `global_signals! {
///     pub loading_signal => is_loading: bool,
///     status_signal => status: String,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
