#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CheckTarget,
}
