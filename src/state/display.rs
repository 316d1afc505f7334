/// Viewer display flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub fullscreen: bool,
}
