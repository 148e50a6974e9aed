// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

pub const README: &str = "\
<!-- generated list, edit by hand -->

# Women Tech Speakers & Organizers

Intro paragraph.

## Speakers

### Berlin

#### Zed Young
* Topics: Rust

#### Dr. Anna Park
* Topics: Go

#### Ludwig van Beethoven
* Topics: Music

### Remote

#### Madonna
#### Bea Adams

## Organizers

### London
#### Tom O'Brien
#### Ann Baker

## Resources

### Links
#### Zeta
#### Alpha
";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

/// Header names in document order.
pub fn header_names(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| line.starts_with("#### "))
        .map(|line| line.trim_start_matches("#### ").to_owned())
        .collect()
}
