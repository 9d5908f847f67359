//! Directory loader.
//!
//! Reads every `.txt` file directly inside a directory (no recursion) and
//! attributes it to the author named by the first character of its file
//! name, so `A1.txt` and `A_letters.txt` both belong to `A`.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stylo_core::Corpus;
use tracing::{debug, warn};

/// A text file read from disk, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedText {
    pub file_name: String,
    pub author: String,
    pub text: String,
}

/// Author label derived from a file name: its first character.
pub fn author_of(file_name: &str) -> Option<String> {
    file_name.chars().next().map(String::from)
}

/// Loads the `.txt` files of `dir`, skipping names listed in `exclude`.
///
/// Files are returned sorted by name so document ids are stable across runs.
pub fn load_dir(dir: &Path, exclude: &[String]) -> Result<Vec<LoadedText>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() || path.extension() != Some(OsStr::new("txt")) {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if exclude.iter().any(|e| e == &name) {
            debug!(file = %name, "excluded");
            continue;
        }
        names.push(name);
    }
    names.sort();

    let mut texts = Vec::with_capacity(names.len());
    for name in names {
        let path = dir.join(&name);
        let bytes = fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                warn!(file = %name, "not valid UTF-8, decoding lossily");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };
        let Some(author) = author_of(&name) else {
            continue;
        };
        texts.push(LoadedText {
            file_name: name,
            author,
            text,
        });
    }

    Ok(texts)
}

/// Inserts loaded texts into a fresh corpus.
pub fn into_corpus(texts: Vec<LoadedText>) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    for loaded in texts {
        debug!(file = %loaded.file_name, author = %loaded.author, "loading document");
        corpus
            .insert(loaded.text, &loaded.author)
            .with_context(|| format!("inserting {}", loaded.file_name))?;
    }
    Ok(corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, text: &str) {
        fs::write(dir.join(name), text).expect("write fixture");
    }

    #[test]
    fn author_is_first_char() {
        assert_eq!(author_of("A1.txt").as_deref(), Some("A"));
        assert_eq!(author_of("Émile.txt").as_deref(), Some("É"));
        assert_eq!(author_of(""), None);
    }

    #[test]
    fn loads_txt_files_sorted_and_excludes() {
        let dir = tempfile::tempdir().expect("tempdir");
        write(dir.path(), "B1.txt", "bee");
        write(dir.path(), "A2.txt", "second a");
        write(dir.path(), "A1.txt", "first a");
        write(dir.path(), "readme.txt", "not a text");
        write(dir.path(), "C1.md", "wrong extension");
        fs::create_dir(dir.path().join("D.txt")).expect("mkdir");

        let texts = load_dir(dir.path(), &["readme.txt".to_owned()]).expect("load");
        let names: Vec<_> = texts.iter().map(|t| t.file_name.as_str()).collect();
        assert_eq!(names, ["A1.txt", "A2.txt", "B1.txt"]);
        assert_eq!(texts[0].author, "A");
        assert_eq!(texts[0].text, "first a");

        let corpus = into_corpus(texts).expect("corpus");
        assert_eq!(corpus.author_documents("A"), Some(&[0, 1][..]));
        assert_eq!(corpus.author_documents("B"), Some(&[2][..]));
    }

    #[test]
    fn missing_dir_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(load_dir(&dir.path().join("nope"), &[]).is_err());
    }
}
