//! Macros for ergonomic machine configuration.

/// Build a [`MachineConfig`](crate::config::MachineConfig) from a table literal.
///
/// Each entry names a state and its `event => target` transitions. States
/// with no outgoing transitions are written with an empty body. The result
/// is validated when a machine is constructed from it.
///
/// # Example
///
/// ```
/// use retrace::machine_config;
///
/// let config = machine_config! {
///     initial: "idle",
///     "idle" => { "start" => "running" },
///     "running" => { "stop" => "idle", "pause" => "paused" },
///     "paused" => { "resume" => "running" },
///     "broken" => {},
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 4);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr
        $(
            , $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
        )*
        $(,)?
    ) => {{
        let states = $crate::core::TransitionTable::new()
            $(
                .with_state(
                    $state,
                    $crate::core::StateDef::new() $( .on($event, $target) )*,
                )
            )*;
        $crate::config::MachineConfig::new(states, $initial)
    }};
}
