/// How strictly card text is parsed.
///
/// `Strict` validates every token and refuses anything that is not five
/// distinct cards. `Lenient` reproduces the legacy character scan, which
/// silently skips symbols it does not know.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    #[default]
    Strict,
    Lenient,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Mode::Strict => "strict",
            Mode::Lenient => "lenient",
        })
    }
}
