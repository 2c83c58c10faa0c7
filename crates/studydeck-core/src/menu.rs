//! Numbered console menus.
//!
//! The same menu serves question banks and classifiers; options only need a
//! title to be listed.

use std::io::{self, BufRead, Write};

/// Prompt printed under the option list.
pub const MENU_PROMPT: &str = "Enter 1, 2, ..., or 0 to quit:";

/// Anything that can appear in a menu.
pub trait MenuOption {
    fn title(&self) -> &str;
}

/// A value paired with the name it is listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedMenuOption<T> {
    pub option: T,
    pub name: String,
}

impl<T> NamedMenuOption<T> {
    pub fn new(option: T, name: impl Into<String>) -> Self {
        Self {
            option,
            name: name.into(),
        }
    }
}

impl<T> MenuOption for NamedMenuOption<T> {
    fn title(&self) -> &str {
        &self.name
    }
}

/// Ask the user to pick one of `options`.
///
/// Lists the options as `1. <title>`, `2. <title>`, ... and re-prompts until
/// the reply is a number in range. `0` or end of input yields `None`.
pub fn choose_menu<'a, T, R, W>(
    options: &'a [T],
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<&'a T>>
where
    T: MenuOption,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    loop {
        for (idx, option) in options.iter().enumerate() {
            writeln!(output, "{}. {}", idx + 1, option.title())?;
        }
        writeln!(output)?;
        writeln!(output, "{MENU_PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(0) => return Ok(None),
            Ok(n) if n <= options.len() => {
                let chosen = &options[n - 1];
                writeln!(output, "You chose to study {}", chosen.title())?;
                return Ok(Some(chosen));
            }
            _ => {
                tracing::debug!("ignoring menu reply {:?}", line.trim());
            }
        }
    }
}
