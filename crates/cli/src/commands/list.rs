use std::path::Path;

use anyhow::Result;
use colored::*;
use plugmat_core::generator::{GeneratorConfig, MatrixGenerator, TriggerEvent};

pub fn execute(root: &Path) -> Result<()> {
    let generator = MatrixGenerator::new(GeneratorConfig {
        repo_root: root.to_path_buf(),
        event: TriggerEvent::Push,
        repository: None,
        pr_number: None,
        output_path: None,
    });

    let records = generator.discover()?;

    println!("{}", "Plugins".bold().underline());

    if records.is_empty() {
        println!("  {}", "No plugins found".dimmed());
        return Ok(());
    }

    for record in &records {
        let mut markers = Vec::new();
        if record.single {
            markers.push("single".to_string());
        }
        if !record.install {
            markers.push("meta".to_string());
        }
        if record.assets {
            markers.push("assets".to_string());
        }
        if record.i18n {
            markers.push("i18n".to_string());
        }
        if record.invalid_manifest {
            markers.push("invalid manifest".to_string());
        }

        if record.invalid_manifest {
            println!(
                "{} {}",
                record.plugin.red().bold(),
                format!("[{}]", markers.join(", ")).dimmed()
            );
        } else if markers.is_empty() {
            println!("{}", record.plugin.blue().bold());
        } else {
            println!(
                "{} {}",
                record.plugin.blue().bold(),
                format!("[{}]", markers.join(", ")).dimmed()
            );
        }

        if !record.deps.is_empty() {
            println!("  {} {}", "depends on:".dimmed(), record.deps.join(", "));
        }
    }

    Ok(())
}
