//! Plugin name validation and the derived forms used in generated files

use std::fmt;

use crate::error::{Result, ScaffoldError};

/// A validated plugin name
///
/// Holds the name exactly as given plus the derived spellings the templates
/// embed: Lua module paths use the verbatim name, augroups and `vim.g` flags
/// use the snake form, the config class annotation uses the type form, and
/// the user command uses the command form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    verbatim: String,
    snake: String,
    type_name: String,
    command_name: String,
}

impl ProjectName {
    /// Validate a raw name and derive its forms
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidName`] if the name is empty once `-` and
    /// `_` are removed, or if anything left is not alphanumeric.
    pub fn parse(raw: &str) -> Result<Self> {
        if !is_valid_plugin_name(raw) {
            return Err(ScaffoldError::InvalidName {
                name: raw.to_string(),
            });
        }

        let snake = raw.replace('-', "_");
        let type_name = title_case(&snake);
        let command_name = title_case(&raw.replace('-', ""));

        Ok(Self {
            verbatim: raw.to_string(),
            snake,
            type_name,
            command_name,
        })
    }

    /// The name as given (`my-plugin`)
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.verbatim
    }

    /// Hyphens replaced by underscores (`my_plugin`)
    #[must_use]
    pub fn snake(&self) -> &str {
        &self.snake
    }

    /// Snake form, title-cased per segment (`My_Plugin`)
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Hyphens removed, title-cased (`Myplugin`)
    #[must_use]
    pub fn command_name(&self) -> &str {
        &self.command_name
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.verbatim
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.verbatim.fmt(f)
    }
}

/// Letters, digits, hyphens and underscores, with at least one letter or digit
fn is_valid_plugin_name(name: &str) -> bool {
    let mut stripped = name.chars().filter(|c| *c != '-' && *c != '_').peekable();
    stripped.peek().is_some() && stripped.all(char::is_alphanumeric)
}

/// Upper-case a cased character that follows an uncased one, lower-case the rest
///
/// Digits and underscores count as word boundaries, so `my_plugin2x` becomes
/// `My_Plugin2X`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;

    for c in s.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !prev_cased {
            out.extend(c.to_uppercase());
        } else if cased {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
        prev_cased = cased;
    }

    out
}
