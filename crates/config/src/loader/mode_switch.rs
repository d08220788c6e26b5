use crate::types::FrameworkMode;

/// Receives the framework mode chosen during run mode initialization.
///
/// The web framework (or whatever stands in for it, such as the log filter)
/// implements this; the loader only decides which mode to apply.
pub trait ModeSwitch {
    fn set_mode(&self, mode: FrameworkMode);
}

impl<F> ModeSwitch for F
where
    F: Fn(FrameworkMode),
{
    fn set_mode(&self, mode: FrameworkMode) {
        self(mode)
    }
}
