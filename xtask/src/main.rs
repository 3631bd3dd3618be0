use clap::Parser;
use std::path::Path;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Launch => {
            let mut cmd = tokio::process::Command::new("trunk");
            cmd.current_dir(std::fs::canonicalize("frontend")?);
            cmd.arg("build");
            cmd.spawn()?.wait().await?;

            let mut cmd = tokio::process::Command::new("cargo");
            cmd.arg("run")
                .arg("--package")
                .arg("ult-launcher")
                .arg("--")
                .arg("--dist-dir")
                .arg("frontend/dist");
            cmd.spawn()?.wait().await?;

            Ok(())
        }
        cli::Command::Dist { target_triple } => {
            let mut cmd = tokio::process::Command::new("cargo");
            cmd.arg("build")
                .arg("--package")
                .arg("ult-launcher")
                .arg("--release");
            if let Some(target_triple) = target_triple {
                cmd.arg("--target").arg(target_triple);
            }
            cmd.spawn()?.wait().await?;

            let mut cmd = tokio::process::Command::new("trunk");
            cmd.current_dir(std::fs::canonicalize("frontend")?);
            cmd.arg("build").arg("--release");
            cmd.spawn()?.wait().await?;

            tokio::fs::create_dir("UltLanding").await?;
            tokio::fs::create_dir("UltLanding/dist").await?;
            tokio::fs::copy(
                "ult-launcher/target/release/ult-launcher",
                "UltLanding/ult-launcher",
            )
            .await?;
            copy_dir_flat(Path::new("frontend/dist"), Path::new("UltLanding/dist")).await?;

            Ok(())
        }
    }
}

/// Copy every file at the top level of `src` into `dst`. The reader is bound
/// once; re-opening the directory per iteration would keep yielding the first
/// entry and never finish.
async fn copy_dir_flat(src: &Path, dst: &Path) -> std::io::Result<()> {
    let mut entries = tokio::fs::read_dir(src).await?;
    while let Some(file) = entries.next_entry().await? {
        tokio::fs::copy(file.path(), dst.join(file.file_name())).await?;
    }
    Ok(())
}
