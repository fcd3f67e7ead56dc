#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RotationState {
    Rotating, // An auto-advance timer is live
    Paused,   // No timer; waiting for a manual action or the pointer to leave
}
