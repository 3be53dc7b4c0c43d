//! Plugin scaffolding command

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;

use crate::error::Result;
use crate::name::ProjectName;
use crate::paths::{resolve_output_root, target_dir};
use crate::templates::PluginTemplate;
use crate::writer::write_files;

/// Create a new Neovim plugin
#[derive(Debug)]
pub struct NewCommand {
    name: ProjectName,
    output_dir: PathBuf,
}

impl NewCommand {
    /// Create a new command instance
    ///
    /// Validates the name before touching the filesystem, then resolves the
    /// output root (creating it if needed) and checks that the plugin
    /// directory is not already there.
    ///
    /// # Arguments
    ///
    /// * `name` - Plugin name (letters, digits, hyphens, underscores)
    /// * `path` - Directory the plugin directory is created in
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid, the output root cannot be
    /// created, or the plugin directory already exists.
    pub fn new(name: &str, path: &str) -> Result<Self> {
        let name = ProjectName::parse(name)?;

        let root = resolve_output_root(path)?;
        if root.created {
            println!("Creating output directory: {}", root.path.display());
        }

        let output_dir = target_dir(&root.path, &name)?;

        Ok(Self { name, output_dir })
    }

    /// Directory the plugin is written to
    #[must_use]
    pub fn output_dir(&self) -> &std::path::Path {
        &self.output_dir
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or any file cannot be written.
    /// Files written before the failure are left in place.
    pub fn execute(&self) -> Result<()> {
        println!(
            "{} {}",
            style("Creating plugin:").green().bold(),
            style(&self.name).cyan().bold()
        );
        println!("{} {}", style("Location:").bold(), self.output_dir.display());
        println!();

        let files = PluginTemplate::new(&self.name).render()?;

        let progress = ProgressBar::new(files.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{bar:30.green} {pos}/{len}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let written = write_files(&self.output_dir, &files, |path, file| {
            progress.suspend(|| {
                println!(
                    "  {} Created: {} {}",
                    style("✓").green(),
                    path.display(),
                    style(format!("({})", file.description)).dim()
                );
            });
            progress.inc(1);
        });
        progress.finish_and_clear();
        written?;

        info!(plugin = %self.name, files = files.len(), "plugin scaffolded");
        self.print_success();

        Ok(())
    }

    /// Print success message with next steps
    fn print_success(&self) {
        println!();
        println!(
            "{}",
            style(format!("✓ Plugin '{}' created successfully!", self.name))
                .green()
                .bold()
        );
        println!();
        println!("{}", style("Next steps:").bold());
        println!(
            "  {} {}",
            style("1.").cyan(),
            style(format!("cd {}", self.output_dir.display())).cyan()
        );
        println!(
            "  {} Edit {} to add your plugin logic",
            style("2.").cyan(),
            style(format!("lua/{}/init.lua", self.name)).cyan()
        );
        println!(
            "  {} Update {} with documentation",
            style("3.").cyan(),
            style(format!("doc/{}.txt", self.name)).cyan()
        );
        println!(
            "  {} Run tests: {}",
            style("4.").cyan(),
            style(r#"nvim --headless -c "PlenaryBustedDirectory tests/""#).cyan()
        );
    }
}
