//! Plugin template rendering

use handlebars::Handlebars;
use serde_json::json;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{Result, ScaffoldError};
use crate::name::ProjectName;

pub mod files;
pub use files::*;

/// One entry of the plugin layout: path template, body template, description
struct FileTemplate {
    path: &'static str,
    body: &'static str,
    description: &'static str,
}

/// Every file a new plugin gets, in write order
const PLUGIN_FILES: &[FileTemplate] = &[
    FileTemplate { path: "lua/{{name}}/init.lua", body: INIT_LUA, description: "entry module" },
    FileTemplate { path: "lua/{{name}}/config.lua", body: CONFIG_LUA, description: "defaults" },
    FileTemplate { path: "lua/{{name}}/commands.lua", body: COMMANDS_LUA, description: "user commands" },
    FileTemplate { path: "lua/{{name}}/autocmds.lua", body: AUTOCMDS_LUA, description: "autocommands" },
    FileTemplate { path: "lua/{{name}}/utils.lua", body: UTILS_LUA, description: "utilities" },
    FileTemplate { path: "lua/{{name}}/health.lua", body: HEALTH_LUA, description: "health check" },
    FileTemplate { path: "plugin/{{name}}.lua", body: PLUGIN_LUA, description: "lazy-load trigger" },
    FileTemplate { path: "doc/{{name}}.txt", body: HELP_TXT, description: "help document" },
    FileTemplate { path: "tests/plugin_spec.lua", body: PLUGIN_SPEC_LUA, description: "unit tests" },
    FileTemplate { path: "tests/minimal_init.lua", body: MINIMAL_INIT_LUA, description: "test bootstrap" },
    FileTemplate { path: "README.md", body: README_MD, description: "readme" },
    FileTemplate { path: "LICENSE", body: LICENSE, description: "license" },
    FileTemplate { path: ".gitignore", body: GITIGNORE, description: "ignore rules" },
    FileTemplate { path: "stylua.toml", body: STYLUA_TOML, description: "formatter config" },
];

/// A rendered file, relative to the plugin root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the target directory
    pub path: PathBuf,
    /// File contents
    pub content: String,
    /// Short label for progress output
    pub description: &'static str,
}

/// Plugin template generator
pub struct PluginTemplate {
    name: ProjectName,
    handlebars: Handlebars<'static>,
}

impl PluginTemplate {
    /// Create a new plugin template
    #[must_use]
    pub fn new(name: &ProjectName) -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        Self {
            name: name.clone(),
            handlebars,
        }
    }

    /// Render every plugin file in write order
    ///
    /// Rendering touches no filesystem state; the result depends only on the
    /// plugin name.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] if a template fails to render.
    pub fn render(&self) -> Result<Vec<GeneratedFile>> {
        let context = json!({
            "name": self.name.as_str(),
            "snake": self.name.snake(),
            "type_name": self.name.type_name(),
            "command_name": self.name.command_name(),
        });

        PLUGIN_FILES
            .iter()
            .map(|file| -> Result<GeneratedFile> {
                let path = self.render_one(file.path, file.path, &context)?;
                let content = self.render_one(&path, file.body, &context)?;
                debug!(path = %path, bytes = content.len(), "rendered template");

                Ok(GeneratedFile {
                    path: PathBuf::from(path),
                    content,
                    description: file.description,
                })
            })
            .collect()
    }

    fn render_one(&self, label: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        self.handlebars
            .render_template(template, context)
            .map_err(|source| ScaffoldError::Render {
                path: label.to_string(),
                source: Box::new(source),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(name: &str) -> Vec<GeneratedFile> {
        let name = ProjectName::parse(name).unwrap();
        PluginTemplate::new(&name).render().unwrap()
    }

    fn content_of<'a>(files: &'a [GeneratedFile], path: &str) -> &'a str {
        files
            .iter()
            .find(|f| f.path == PathBuf::from(path))
            .map(|f| f.content.as_str())
            .unwrap_or_else(|| panic!("missing {path}"))
    }

    #[test]
    fn test_render_layout_order() {
        let files = render("my-plugin");
        let paths: Vec<_> = files.iter().map(|f| f.path.to_str().unwrap()).collect();

        assert_eq!(
            paths,
            [
                "lua/my-plugin/init.lua",
                "lua/my-plugin/config.lua",
                "lua/my-plugin/commands.lua",
                "lua/my-plugin/autocmds.lua",
                "lua/my-plugin/utils.lua",
                "lua/my-plugin/health.lua",
                "plugin/my-plugin.lua",
                "doc/my-plugin.txt",
                "tests/plugin_spec.lua",
                "tests/minimal_init.lua",
                "README.md",
                "LICENSE",
                ".gitignore",
                "stylua.toml",
            ]
        );
        assert!(files.iter().all(|f| !f.content.is_empty()));
    }

    #[test]
    fn test_no_placeholders_survive() {
        for file in render("my-plugin") {
            assert!(!file.content.contains("{{"), "unrendered placeholder in {}", file.path.display());
        }
    }

    #[test]
    fn test_init_module_references_siblings() {
        let files = render("my-plugin");
        let init = content_of(&files, "lua/my-plugin/init.lua");

        assert!(init.contains(r#"require("my-plugin.commands").setup()"#));
        assert!(init.contains(r#"require("my-plugin.autocmds").setup()"#));
        assert!(init.contains("---@class My_PluginConfig"));
        assert!(init.contains("---@param opts My_PluginConfig|nil"));
        assert!(init.contains(r#"vim.tbl_deep_extend("force", M.config, opts or {})"#));
    }

    #[test]
    fn test_command_name_form() {
        let files = render("my-plugin");

        assert!(content_of(&files, "lua/my-plugin/commands.lua")
            .contains(r#"nvim_create_user_command("Myplugin""#));
        assert!(content_of(&files, "README.md").contains("- `:Myplugin` - Main command"));
        assert!(content_of(&files, "doc/my-plugin.txt").contains("*:Myplugin*"));
    }

    #[test]
    fn test_snake_form_in_flags_and_augroup() {
        let files = render("my-plugin");

        let trigger = content_of(&files, "plugin/my-plugin.lua");
        assert!(trigger.contains("if vim.g.loaded_my_plugin then"));
        assert!(trigger.contains("vim.g.loaded_my_plugin = true"));
        assert!(trigger.contains("if not vim.g.my_plugin_configured then"));

        assert!(content_of(&files, "lua/my-plugin/autocmds.lua")
            .contains(r#"nvim_create_augroup("my_plugin", { clear = true })"#));
    }

    #[test]
    fn test_help_document_sections() {
        let files = render("my-plugin");
        let doc = content_of(&files, "doc/my-plugin.txt");

        let sections = ["CONTENTS", "1. INTRODUCTION", "2. SETUP", "3. COMMANDS", "4. CONFIGURATION"];
        let positions: Vec<_> = sections.iter().map(|s| doc.find(s).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(doc.starts_with("*my-plugin.txt*"));
        assert!(doc.ends_with("vim:tw=78:ts=8:ft=help:norl:\n"));
    }

    #[test]
    fn test_busted_cases_are_consistent() {
        let files = render("my-plugin");
        let spec = content_of(&files, "tests/plugin_spec.lua");

        let default_case = spec.find("assert.is_true(plugin.config.enabled)").unwrap();
        let setup = spec.find("plugin.setup({ enabled = false })").unwrap();
        let disabled_case = spec.find("assert.is_false(plugin.config.enabled)").unwrap();
        assert!(default_case < setup && setup < disabled_case);
    }

    #[test]
    fn test_static_files_ignore_name() {
        let a = render("alpha");
        let b = render("beta_two");

        for path in ["LICENSE", ".gitignore", "stylua.toml", "tests/minimal_init.lua"] {
            assert_eq!(content_of(&a, path), content_of(&b, path));
        }
        assert!(content_of(&a, "stylua.toml").contains("column_width = 100"));
        assert!(content_of(&a, "LICENSE").starts_with("MIT License"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render("my-plugin"), render("my-plugin"));
    }
}
