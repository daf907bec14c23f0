//! Script generation command.

use crate::cli::{Args, RuntimeConfig};
use crate::config::{self, SavedSettings};
use crate::error::Result;
use crate::generator::{self, InstallSpecBuilder, ScriptOptions, load_spec_file};
use path_absolutize::Absolutize;
use std::io::Write;

/// Generate a script from saved settings, an optional spec file and flags.
///
/// This function:
/// 1. Loads saved settings (missing or damaged files yield defaults)
/// 2. Layers the spec file, then the flags, on top
/// 3. Saves the form values when `--save-config` is set
/// 4. Validates and renders the script
/// 5. Writes it to `--output` or prints it to stdout
pub async fn generate(args: &Args, runtime_config: &RuntimeConfig) -> Result<i32> {
    let saved = config::load(&args.config).await;
    let mut builder = saved.to_builder();

    if let Some(spec_path) = &args.spec {
        builder = builder.overlay(load_spec_file(spec_path).await?);
    }
    builder = apply_flags(builder, args);

    if args.save_config {
        config::save(&args.config, &SavedSettings::from(&builder)).await?;
    }

    let labels = runtime_config.locale().labels();
    let options = ScriptOptions {
        out_file: args.out_file.trim().to_string(),
        uninstall_label: args
            .uninstall_label
            .as_deref()
            .map(str::trim)
            .unwrap_or(labels.uninstall_shortcut)
            .to_string(),
    };

    let script = generator::generate(builder, options)?;
    log::info!("Generated NSI script (SHA256 {})", script.sha256());

    match &args.output {
        Some(path) => {
            generator::write_script(path, &script, runtime_config.bom()).await?;
            let absolute = path.absolutize()?;
            println!("{} {}", labels.script_written, absolute.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(script.as_str().as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(0)
}

/// Flags override everything else; `--file` replaces the whole list.
fn apply_flags(mut builder: InstallSpecBuilder, args: &Args) -> InstallSpecBuilder {
    if let Some(name) = &args.name {
        builder = builder.program_name(name.as_str());
    }
    if let Some(dir) = &args.install_dir {
        builder = builder.install_dir(dir.as_str());
    }
    if let Some(icon) = &args.icon {
        builder = builder.icon_path(icon.as_str());
    }
    if !args.files.is_empty() {
        builder = builder.files(args.files.iter().map(String::as_str));
    }
    if let Some(main_file) = &args.main_file {
        builder = builder.main_file(main_file.as_str());
    }
    builder
}
