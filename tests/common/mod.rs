#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Stand-in for the terraform CLI
///
/// Records `<cwd>|<args>` per invocation. `init` fails when the module has
/// a `.init-fails` marker. `validate` fails when a resource group block has
/// no `location` attribute.
const FAKE_TERRAFORM: &str = r#"#!/bin/sh
echo "$(pwd -P)|$*" >> "__LOG__"
case "$1" in
  version)
    echo "Terraform v1.9.0"
    exit 0
    ;;
  init)
    if [ -f .init-fails ]; then
      echo "Error: Failed to query available provider packages" >&2
      exit 1
    fi
    mkdir -p .terraform
    echo "Terraform has been successfully initialized!"
    exit 0
    ;;
  validate)
    if grep -q 'resource "azurerm_resource_group"' ./*.tf 2>/dev/null \
      && ! grep -q 'location' ./*.tf 2>/dev/null; then
      echo "Error: Missing required argument" >&2
      echo "The argument \"location\" is required, but no definition was found." >&2
      exit 1
    fi
    echo "Success! The configuration is valid."
    exit 0
    ;;
esac
echo "unexpected subcommand: $1" >&2
exit 2
"#;

pub const VALID_RESOURCE_GROUP: &str = r#"resource "azurerm_resource_group" "rg" {
  name     = "rg-example"
  location = "westeurope"
}
"#;

pub const MALFORMED_RESOURCE_GROUP: &str = r#"resource "azurerm_resource_group" "rg" {
  name = "rg-example"
}
"#;

pub struct TestEnv {
    pub temp: TempDir,
    pub root: PathBuf,
    pub xdg: PathBuf,
    pub terraform: PathBuf,
    log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();

        let xdg = root.join("xdg");
        fs::create_dir_all(&xdg).unwrap();

        let bin = root.join("bin");
        fs::create_dir_all(&bin).unwrap();
        let log = root.join("terraform.log");
        let terraform = bin.join("terraform");
        fs::write(
            &terraform,
            FAKE_TERRAFORM.replace("__LOG__", &log.display().to_string()),
        )
        .unwrap();
        fs::set_permissions(&terraform, fs::Permissions::from_mode(0o755)).unwrap();

        Self {
            temp,
            root,
            xdg,
            terraform,
            log,
        }
    }

    /// Create a module directory under the temp root with the given files
    pub fn module(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let child = self.temp.child(name);
        child.create_dir_all().unwrap();
        for (file, content) in files {
            child.child(file).write_str(content).unwrap();
        }
        self.root.join(name)
    }

    /// tfcheck with isolated config and the fake terraform
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("tfcheck").unwrap();
        cmd.env("XDG_CONFIG_HOME", &self.xdg)
            .env("TFCHECK_TERRAFORM", &self.terraform)
            .env_remove("NO_COLOR")
            .current_dir(&self.root)
            .arg("--color=never");
        cmd
    }

    /// Recorded invocations as `(cwd, args)`, skipping `version` probes
    pub fn invocations(&self) -> Vec<(PathBuf, String)> {
        let Ok(content) = fs::read_to_string(&self.log) else {
            return Vec::new();
        };
        content
            .lines()
            .filter_map(|line| line.split_once('|'))
            .filter(|(_, args)| *args != "version")
            .map(|(cwd, args)| (PathBuf::from(cwd), args.to_string()))
            .collect()
    }

    pub fn clear_log(&self) {
        let _ = fs::remove_file(&self.log);
    }
}

pub fn assert_dir(actual: &Path, expected: &Path) {
    assert_eq!(
        actual.canonicalize().unwrap(),
        expected.canonicalize().unwrap()
    );
}
