use anyhow::{Context, Result, ensure};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use yansi::Paint;

/// Render a directory as a tree with box-drawing connectors.
///
/// Directories end with a `/` and are painted blue, files green, when
/// `color` is on. Entries are listed sorted by name so the output is stable
/// across platforms. A path that doesn't exist or isn't a directory is an
/// error.
pub fn render_tree(path: impl AsRef<Path>, color: bool) -> Result<String> {
    let path = path.as_ref();
    ensure!(
        path.is_dir(),
        "path {} does not exist or is not a directory",
        path.display()
    );

    let root = match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.display().to_string(),
    };

    let mut out = String::new();
    if color {
        writeln!(out, "{}/", Paint::blue(&root))?;
    } else {
        writeln!(out, "{root}/")?;
    }
    render_children(path, "", color, &mut out)?;
    Ok(out)
}

/// Render the tree rooted at `path` to standard output.
pub fn print_tree(path: impl AsRef<Path>, color: bool) -> Result<()> {
    print!("{}", render_tree(path, color)?);
    Ok(())
}

fn render_children(dir: &Path, prefix: &str, color: bool, out: &mut String) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .with_context(|| format!("can't read directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("can't list directory {}", dir.display()))?;
    entries.sort_by_key(|e| e.file_name());

    let count = entries.len();
    for (index, entry) in entries.iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        if path.is_dir() {
            if color {
                writeln!(out, "{prefix}{connector}{}/", Paint::blue(&name))?;
            } else {
                writeln!(out, "{prefix}{connector}{name}/")?;
            }
            let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
            render_children(&path, &child_prefix, color, out)?;
        } else if color {
            writeln!(out, "{prefix}{connector}{}", Paint::green(&name))?;
        } else {
            writeln!(out, "{prefix}{connector}{name}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{File, create_dir};

    #[test]
    fn test_render_tree_nested_layout() {
        let dir = tempfile::Builder::new()
            .prefix("tree_fixture")
            .tempdir()
            .unwrap();
        let root = dir.path();

        create_dir(root.join("src")).unwrap();
        File::create(root.join("src").join("main.rs")).unwrap();
        File::create(root.join("src").join("lib.rs")).unwrap();
        create_dir(root.join("assets")).unwrap();
        create_dir(root.join("assets").join("icons")).unwrap();
        File::create(root.join("assets").join("icons").join("icon.svg")).unwrap();
        File::create(root.join("README.md")).unwrap();

        let rendered = render_tree(root, false).unwrap();
        let root_name = root.file_name().unwrap().to_string_lossy();

        let expected = format!(
            "{root_name}/\n\
             ├── README.md\n\
             ├── assets/\n\
             │   └── icons/\n\
             │       └── icon.svg\n\
             └── src/\n\
             \u{20}   ├── lib.rs\n\
             \u{20}   └── main.rs\n"
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_tree_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let rendered = render_tree(dir.path(), false).unwrap();
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.ends_with("/\n"));
    }

    #[test]
    fn test_render_tree_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_tree(dir.path().join("nope"), false).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_render_tree_rejects_plain_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        File::create(&file).unwrap();
        assert!(render_tree(&file, false).is_err());
    }
}
