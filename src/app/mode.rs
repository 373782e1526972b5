/// Where the session is in its boot → input → reading cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Boot,
    Input,
    Reading,
    Quit,
}

impl Stage {
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Boot => "BOOT",
            Stage::Input => "INPUT",
            Stage::Reading => "READING",
            Stage::Quit => "QUIT",
        }
    }
}
