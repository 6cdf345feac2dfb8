/// Defines the contract for receiving the outcome of a send.
///
/// Implemented by adapters (e.g. the terminal) that want outcomes delivered to an
/// object rather than to a pair of closures. Exactly one method is called per send.
pub trait Dispatch {
    /// Called with `"Sent to <name>: <formatted notification>"` when the user is valid.
    fn sent(&self, message: &str);

    /// Called with the validation failure message when the user is invalid.
    fn failed(&self, reason: &str);
}
