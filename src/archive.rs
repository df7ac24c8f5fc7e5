//! Year/level archive of renamed actas.
//!
//! [`ActaArchive`] owns the archive root and processes batches strictly one
//! document at a time; nothing else writes under the root while a batch runs,
//! so no file locking is done. A document that fails is recorded in the
//! batch result and never stops the batch.

use crate::error::{Error, Result};
use crate::model::{BatchResult, ProcessResult};
use crate::naming::{derive_filename, derive_path};
use crate::page::WordSource;
use crate::parser::ActaParser;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// One input document: its filename and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    /// Filename as received
    pub name: String,
    /// Raw PDF bytes
    pub bytes: Vec<u8>,
}

impl InputDocument {
    /// Create an input document.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// Read a document from disk, named after its file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, fs::read(path)?))
    }
}

/// An input read into memory, or the error entry recording why it was not.
pub type LoadedInput = std::result::Result<InputDocument, ProcessResult>;

/// Read every path into memory, in order.
///
/// A file that cannot be read becomes an error entry in its own position, so
/// the batch result keeps the input order. Reading everything up front lets
/// the caller reset the archive afterwards without losing inputs.
pub fn load_inputs<P: AsRef<Path>>(paths: &[P]) -> Vec<LoadedInput> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            InputDocument::from_path(path).map_err(|e| ProcessResult::Error {
                file: path.display().to_string(),
                message: format!("unexpected error: {}", e),
            })
        })
        .collect()
}

/// Archive writer bound to one root directory.
pub struct ActaArchive<S: WordSource> {
    root: PathBuf,
    parser: ActaParser,
    source: S,
}

impl<S: WordSource> ActaArchive<S> {
    /// Create an archive at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>, parser: ActaParser, source: S) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            parser,
            source,
        })
    }

    /// The archive root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The parser used for every document.
    pub fn parser(&self) -> &ActaParser {
        &self.parser
    }

    /// Whether `path` lies inside the archive root.
    ///
    /// Both sides are canonicalized, so relative paths and symlinks are
    /// resolved; a path that does not exist is never inside.
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        match (fs::canonicalize(&self.root), fs::canonicalize(path)) {
            (Ok(root), Ok(path)) => path.starts_with(root),
            _ => false,
        }
    }

    /// Process documents in order, archiving each one that parses.
    pub fn process_batch<I>(&self, documents: I) -> BatchResult
    where
        I: IntoIterator<Item = InputDocument>,
    {
        self.process_loaded(documents.into_iter().map(Ok))
    }

    /// Process loaded inputs in order; read failures are recorded as they
    /// come, in their own position.
    pub fn process_loaded<I>(&self, inputs: I) -> BatchResult
    where
        I: IntoIterator<Item = LoadedInput>,
    {
        let mut batch = BatchResult::new();
        for input in inputs {
            let result = match input {
                Ok(document) => self.process_document(&document),
                Err(failure) => failure,
            };
            if let ProcessResult::Error { file, message } = &result {
                log::warn!("{}: {}", file, message);
            }
            batch.push(result);
        }
        log::info!(
            "batch done: {} processed, {} archived, {} failed",
            batch.total(),
            batch.succeeded(),
            batch.failed()
        );
        batch
    }

    /// Parse and archive one document. Never fails: errors become an error
    /// entry carrying the parse message, or `unexpected error: …` otherwise.
    pub fn process_document(&self, document: &InputDocument) -> ProcessResult {
        match self.process_one(document) {
            Ok(result) => result,
            Err(Error::Parsing(message)) => ProcessResult::Error {
                file: document.name.clone(),
                message,
            },
            Err(e) => ProcessResult::Error {
                file: document.name.clone(),
                message: format!("unexpected error: {}", e),
            },
        }
    }

    fn process_one(&self, document: &InputDocument) -> Result<ProcessResult> {
        let mut metadata = self
            .parser
            .parse_bytes(&self.source, &document.bytes, &document.name)?;

        let new_filename = derive_filename(&metadata);
        metadata.new_filename = Some(new_filename.clone());

        let destination = derive_path(&metadata, &self.root);
        if let Some(dir) = destination.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&destination, &document.bytes)?;
        log::info!("{} -> {}", document.name, destination.display());

        Ok(ProcessResult::Success {
            file: document.name.clone(),
            metadata,
            new_filename,
            destination,
        })
    }

    /// Remove everything under the root and recreate it empty.
    pub fn clear(&self) -> Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root)?;
        }
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Every archived file, relative to the root, in sorted order.
    pub fn archived_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        collect_files(&self.root, &self.root, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Package the archive into `Actas_Procesadas_<id>.zip` inside `out_dir`.
    ///
    /// Entry names are relative to the root and use `/` separators.
    pub fn package_zip(&self, out_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let out_dir = out_dir.as_ref();
        fs::create_dir_all(out_dir)?;

        let id = uuid::Uuid::new_v4().simple().to_string();
        let zip_path = out_dir.join(format!("Actas_Procesadas_{}.zip", &id[..8]));

        let mut writer = ZipWriter::new(File::create(&zip_path)?);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let files = self.archived_files()?;
        for relative in &files {
            let entry = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/");
            writer.start_file(entry, options)?;
            let mut input = File::open(self.root.join(relative))?;
            io::copy(&mut input, &mut writer)?;
        }
        writer.finish()?.flush()?;

        log::info!("packaged {} file(s) into {}", files.len(), zip_path.display());
        Ok(zip_path)
    }
}

impl<S: WordSource> std::fmt::Debug for ActaArchive<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActaArchive")
            .field("root", &self.root)
            .field("parser", &self.parser)
            .finish_non_exhaustive()
    }
}

fn collect_files(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(root, &path, out)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            out.push(relative.to_path_buf());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PositionedWord;
    use crate::page::RawPage;

    /// Treats the bytes as UTF-8 header lines, one word per line.
    struct LineSource;

    impl WordSource for LineSource {
        fn first_page(&self, bytes: &[u8]) -> Result<RawPage> {
            let text = std::str::from_utf8(bytes).map_err(|e| Error::Source(e.to_string()))?;
            let words = text
                .lines()
                .enumerate()
                .map(|(i, line)| {
                    let top = 20.0 * i as f32;
                    PositionedWord::new(line, top, top + 10.0, 0.0, 100.0)
                })
                .collect();
            Ok(RawPage::new(1000.0, words))
        }
    }

    fn archive(root: &Path) -> ActaArchive<LineSource> {
        ActaArchive::new(root, ActaParser::default(), LineSource).unwrap()
    }

    #[test]
    fn test_batch_archives_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let archive = archive(&dir.path().join("ActasProcesadas"));

        let batch = archive.process_batch(vec![
            InputDocument::new("a.pdf", b"2025\nNUMERO Y/O NOMBRE 71009\nSECUNDARIA\nGRADO 2".to_vec()),
            InputDocument::new("b.pdf", b"NO LEVEL HERE".to_vec()),
            InputDocument::new("c.pdf", vec![0xff, 0xfe]),
        ]);

        assert_eq!(batch.total(), 3);
        assert_eq!(batch.succeeded(), 1);
        assert_eq!(batch.failed(), 2);

        match &batch.results()[0] {
            ProcessResult::Success {
                metadata,
                new_filename,
                destination,
                ..
            } => {
                assert_eq!(new_filename, "2025 - 0000000 - 71009 - 2do A.pdf");
                assert_eq!(metadata.new_filename.as_deref(), Some(new_filename.as_str()));
                assert!(destination.ends_with("2025/SECUNDARIA/2025 - 0000000 - 71009 - 2do A.pdf"));
                assert!(destination.exists());
            },
            other => panic!("expected success, got {:?}", other),
        }
        match &batch.results()[1] {
            ProcessResult::Error { message, .. } => assert_eq!(message, "Level not detected"),
            other => panic!("expected error, got {:?}", other),
        }
        match &batch.results()[2] {
            ProcessResult::Error { message, .. } => {
                assert!(message.starts_with("could not read PDF:"))
            },
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_failures_keep_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.pdf");
        let last = dir.path().join("last.pdf");
        fs::write(&first, b"PRIMARIA").unwrap();
        fs::write(&last, b"SECUNDARIA").unwrap();
        let missing = dir.path().join("missing.pdf");

        let archive = archive(&dir.path().join("root"));
        let batch = archive.process_loaded(load_inputs(&[&first, &missing, &last]));

        let files: Vec<&str> = batch.results().iter().map(|r| r.file()).collect();
        assert_eq!(files[0], "first.pdf");
        assert!(files[1].ends_with("missing.pdf"));
        assert_eq!(files[2], "last.pdf");
        assert!(batch.results()[0].is_success());
        assert!(!batch.results()[1].is_success());
        assert!(batch.results()[2].is_success());
        match &batch.results()[1] {
            ProcessResult::Error { message, .. } => {
                assert!(message.starts_with("unexpected error:"))
            },
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_inputs_loaded_before_clear_survive_it() {
        let dir = tempfile::tempdir().unwrap();
        let archive = archive(&dir.path().join("root"));
        archive.process_batch(vec![InputDocument::new("a.pdf", b"PRIMARIA\n2023".to_vec())]);

        let archived: Vec<PathBuf> = archive
            .archived_files()
            .unwrap()
            .into_iter()
            .map(|p| archive.root().join(p))
            .collect();
        assert!(archive.contains(&archived[0]));
        assert!(!archive.contains(dir.path()));
        assert!(!archive.contains(dir.path().join("nowhere.pdf")));

        let loaded = load_inputs(&archived);
        archive.clear().unwrap();
        let batch = archive.process_loaded(loaded);
        assert_eq!(batch.succeeded(), 1);
        assert_eq!(archive.archived_files().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_empties_root() {
        let dir = tempfile::tempdir().unwrap();
        let archive = archive(dir.path());
        archive.process_batch(vec![InputDocument::new("a.pdf", b"PRIMARIA".to_vec())]);
        assert_eq!(archive.archived_files().unwrap().len(), 1);

        archive.clear().unwrap();
        assert!(archive.root().exists());
        assert!(archive.archived_files().unwrap().is_empty());
    }

    #[test]
    fn test_package_zip_uses_relative_entries() {
        let dir = tempfile::tempdir().unwrap();
        let archive = archive(&dir.path().join("root"));
        archive.process_batch(vec![
            InputDocument::new("a.pdf", b"PRIMARIA\n2023".to_vec()),
            InputDocument::new("b.pdf", b"INICIAL\n2024".to_vec()),
        ]);

        let zip_path = archive.package_zip(dir.path().join("out")).unwrap();
        let file_name = zip_path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(file_name.starts_with("Actas_Procesadas_"));
        assert_eq!(file_name.len(), "Actas_Procesadas_".len() + 8 + ".zip".len());

        let mut zip = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let mut names: Vec<String> = (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "2023/PRIMARIA/2023 - 0000000 - IE DESCONOCIDA - 1ro A.pdf",
                "2024/INICIAL/2024 - 0000000 - IE DESCONOCIDA - 1a A.pdf",
            ]
        );
    }
}
