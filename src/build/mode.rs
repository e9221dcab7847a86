// file: src/build/mode.rs
// version: 1.0.0
// guid: 09ddf2c7-1c1a-4de1-9691-7fede763693a

//! Build type selection

use crate::error::BuildError;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// CMake build profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildType {
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "release")]
    Release,
}

impl BuildType {
    /// Get the label passed to CMake and used for the build directory
    pub fn label(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
        }
    }

    /// Interpret a menu selection.
    ///
    /// `0` selects Debug and every other integer selects Release. Input that
    /// is not an integer is rejected.
    pub fn from_selection(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix(|c: char| c == '+' || c == '-')
            .unwrap_or(trimmed);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BuildError::invalid_argument(format!(
                "build type selection must be an integer, got '{}'",
                trimmed
            )));
        }

        // Compared digit-wise so integers of any width are accepted
        Ok(if digits.bytes().all(|b| b == b'0') {
            BuildType::Debug
        } else {
            BuildType::Release
        })
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for BuildType {
    type Err = BuildError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildType::Debug),
            "release" => Ok(BuildType::Release),
            _ => Err(BuildError::invalid_argument(format!(
                "Unknown build type: {}",
                s
            ))),
        }
    }
}

/// Show the build type menu on `writer` and read the answer from `reader`.
///
/// The read is async so a pending prompt does not block signal handling.
pub async fn prompt_build_type<R, W>(reader: &mut R, writer: &mut W) -> Result<BuildType>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(writer, "Select the build type:")?;
    writeln!(writer, "\t0 - Debug")?;
    writeln!(writer, "\t1 - Release")?;
    write!(writer, "==> ")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Err(BuildError::invalid_argument(
            "no build type selected: input closed",
        ));
    }

    BuildType::from_selection(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_zero_selects_debug() {
        assert_eq!(BuildType::from_selection("0").unwrap(), BuildType::Debug);
        assert_eq!(BuildType::from_selection(" 0\n").unwrap(), BuildType::Debug);
        assert_eq!(BuildType::from_selection("-0").unwrap(), BuildType::Debug);
        assert_eq!(BuildType::from_selection("000").unwrap(), BuildType::Debug);
    }

    #[test]
    fn test_other_integers_select_release() {
        for input in ["1", "7", "-3", "+2", "42\n", "99999999999999999999"] {
            assert_eq!(
                BuildType::from_selection(input).unwrap(),
                BuildType::Release,
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_non_integer_is_rejected() {
        for input in ["abc", "", "  \n", "1.5", "debug", "-", "+-1", "1 2"] {
            let err = BuildType::from_selection(input).unwrap_err();
            assert!(matches!(err, BuildError::InvalidArgument(_)), "input {:?}", input);
        }
    }

    #[test]
    fn test_label_and_display() {
        assert_eq!(BuildType::Debug.label(), "Debug");
        assert_eq!(BuildType::Release.to_string(), "Release");
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("DEBUG".parse::<BuildType>().unwrap(), BuildType::Debug);
        assert_eq!("release".parse::<BuildType>().unwrap(), BuildType::Release);
        assert!("relwithdebinfo".parse::<BuildType>().is_err());
    }

    #[tokio::test]
    async fn test_prompt_writes_menu_and_reads_answer() {
        let mut input = Cursor::new("0\n");
        let mut output = Vec::new();

        let build_type = prompt_build_type(&mut input, &mut output).await.unwrap();

        assert_eq!(build_type, BuildType::Debug);
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown, "Select the build type:\n\t0 - Debug\n\t1 - Release\n==> ");
    }

    #[tokio::test]
    async fn test_prompt_fails_on_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        assert!(prompt_build_type(&mut input, &mut output).await.is_err());
    }
}
