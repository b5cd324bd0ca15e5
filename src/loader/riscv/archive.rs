//! The extension archive: one description file per extension combination, with cross-file
//! imports resolved to the concrete record they name.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashMap;

use crate::isa::diagnostic::{Diagnostic, DiagnosticPhase, SourcePosition, SourceSpan};
use crate::isa::error::BuildError;
use crate::loader::riscv::arg_lut::ArgLut;
use crate::loader::riscv::parser::{Entry, RawInstruction, parse_str};
use crate::loader::riscv::record::{Encoding, ResolveError, resolve};

const UNVERIFIED_DIR: &str = "unratified";

/// One resolved instruction definition, shared by every file that imports it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub encoding: Encoding,
    /// `(extension file, instruction)` for pseudo-instructions.
    pub parent: Option<(String, String)>,
}

#[derive(Clone, Debug)]
enum Item {
    Local(usize),
    Import {
        extension: String,
        name: String,
        line: usize,
    },
}

#[derive(Clone, Debug)]
struct ExtensionFile {
    name: String,
    path: PathBuf,
    verified: bool,
    items: Vec<Item>,
    /// Record index of every item, filled once imports are resolved.
    resolved: Vec<Option<usize>>,
}

impl ExtensionFile {
    fn chunks(&self) -> impl Iterator<Item = &str> {
        self.name.split('_')
    }

    fn applies_to(&self, target: &str) -> bool {
        self.chunks().next().is_some_and(|prefix| prefix == "rv" || prefix == target)
    }
}

/// A record picked for one target, with every extension label that pulls it in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selected<'a> {
    pub record: &'a Record,
    pub labels: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Archive {
    files: Vec<ExtensionFile>,
    records: Vec<Record>,
}

impl Archive {
    /// Reads every file in `dir` (verified) and in `dir/unratified` (unverified).
    pub fn load(dir: &Path, lut: &ArgLut, diagnostics: &mut Vec<Diagnostic>) -> Result<Self, BuildError> {
        let mut sources = Vec::new();
        collect_files(dir, true, &mut sources)?;
        let unverified = dir.join(UNVERIFIED_DIR);
        if unverified.is_dir() {
            collect_files(&unverified, false, &mut sources)?;
        }
        let mut texts = Vec::with_capacity(sources.len());
        for (path, verified) in sources {
            let src = fs::read_to_string(&path)?;
            texts.push((path, verified, src));
        }
        Self::from_sources(
            texts
                .iter()
                .map(|(path, verified, src)| (path.as_path(), *verified, src.as_str())),
            lut,
            diagnostics,
        )
    }

    /// Builds an archive from in-memory `(path, verified, text)` sources. The file name of each
    /// path is its extension name.
    pub fn from_sources<'s>(
        sources: impl IntoIterator<Item = (&'s Path, bool, &'s str)>,
        lut: &ArgLut,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Self, BuildError> {
        let mut archive = Archive::default();
        for (path, verified, src) in sources {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let entries = parse_str(src, path, diagnostics);
            let mut items = Vec::with_capacity(entries.len());
            for entry in entries {
                let (instruction, parent) = match entry {
                    Entry::Import {
                        extension,
                        name,
                        line,
                    } => {
                        items.push(Item::Import {
                            extension,
                            name,
                            line,
                        });
                        continue;
                    }
                    Entry::Concrete(instruction) => (instruction, None),
                    Entry::Pseudo {
                        parent_extension,
                        parent_name,
                        instruction,
                    } => (instruction, Some((parent_extension, parent_name))),
                };
                if let Some(record) = archive.resolve_record(path, instruction, parent, lut, diagnostics)? {
                    items.push(Item::Local(record));
                }
            }
            let resolved = vec![None; items.len()];
            archive.files.push(ExtensionFile {
                name,
                path: path.to_path_buf(),
                verified,
                items,
                resolved,
            });
        }
        archive.resolve_imports(diagnostics)?;
        Ok(archive)
    }

    fn resolve_record(
        &mut self,
        path: &Path,
        instruction: RawInstruction,
        parent: Option<(String, String)>,
        lut: &ArgLut,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<usize>, BuildError> {
        match resolve(&instruction, lut) {
            Ok(encoding) => {
                self.records.push(Record {
                    name: instruction.name,
                    encoding,
                    parent,
                });
                Ok(Some(self.records.len() - 1))
            }
            Err(ResolveError::Malformed(message)) => {
                diagnostics.push(Diagnostic::warning(
                    DiagnosticPhase::Ingestion,
                    "riscv.record.malformed",
                    format!("skipping '{}': {message}", instruction.name),
                    Some(SourceSpan::point(
                        path.to_path_buf(),
                        SourcePosition::new(instruction.line, 1),
                    )),
                ));
                Ok(None)
            }
            Err(ResolveError::Fatal(err)) => Err(err),
        }
    }

    fn resolve_imports(&mut self, diagnostics: &mut Vec<Diagnostic>) -> Result<(), BuildError> {
        let index: AHashMap<String, usize> = self
            .files
            .iter()
            .enumerate()
            .map(|(position, file)| (file.name.clone(), position))
            .collect();
        for file in 0..self.files.len() {
            for item in 0..self.files[file].items.len() {
                let mut chain = Vec::new();
                let resolved = self.follow(&index, file, item, &mut chain)?;
                if resolved.is_none() {
                    if let Item::Import {
                        extension,
                        name,
                        line,
                    } = &self.files[file].items[item]
                    {
                        diagnostics.push(Diagnostic::warning(
                            DiagnosticPhase::Ingestion,
                            "riscv.import.missing",
                            format!("import target {extension}::{name} not found"),
                            Some(SourceSpan::point(
                                self.files[file].path.clone(),
                                SourcePosition::new(*line, 1),
                            )),
                        ));
                    }
                }
                self.files[file].resolved[item] = resolved;
            }
        }
        Ok(())
    }

    /// Follows an import chain to a concrete record. `chain` holds the `ext::name` links visited.
    fn follow(
        &self,
        index: &AHashMap<String, usize>,
        file: usize,
        item: usize,
        chain: &mut Vec<String>,
    ) -> Result<Option<usize>, BuildError> {
        match &self.files[file].items[item] {
            Item::Local(record) => Ok(Some(*record)),
            Item::Import { extension, name, .. } => {
                let link = format!("{extension}::{name}");
                if chain.contains(&link) {
                    chain.push(link);
                    return Err(BuildError::ImportCycle {
                        chain: chain.clone(),
                    });
                }
                chain.push(link);
                let Some(&target_file) = index.get(extension) else {
                    return Ok(None);
                };
                let target_item = self.files[target_file].items.iter().position(|candidate| {
                    match candidate {
                        Item::Local(record) => self.records[*record].name == *name,
                        Item::Import { name: imported, .. } => imported == name,
                    }
                });
                match target_item {
                    Some(target_item) => self.follow(index, target_file, target_item, chain),
                    None => Ok(None),
                }
            }
        }
    }

    /// Sorted extension names available for `target` (`rv32` or `rv64`).
    pub fn available_extensions(&self, target: &str, include_unverified: bool) -> Vec<String> {
        let mut extensions = BTreeSet::new();
        for file in &self.files {
            if (file.verified || include_unverified) && file.applies_to(target) {
                extensions.extend(file.chunks().skip(1).map(str::to_string));
            }
        }
        extensions.into_iter().collect()
    }

    /// Every record reachable from the files whose extensions are all in `extensions`, each once,
    /// ordered by `(labels, name)`.
    pub fn select(&self, target: &str, extensions: &[String], include_unverified: bool) -> Vec<Selected<'_>> {
        let mut order: Vec<usize> = Vec::new();
        let mut labels: AHashMap<usize, Vec<String>> = AHashMap::new();
        for file in &self.files {
            if !file.applies_to(target) || !(file.verified || include_unverified) {
                continue;
            }
            let mut chunks: Vec<&str> = file.chunks().skip(1).collect();
            if !chunks.iter().all(|chunk| extensions.iter().any(|ext| ext == chunk)) {
                continue;
            }
            chunks.sort_unstable();
            let label = chunks.join("_");
            for record in file.resolved.iter().flatten() {
                let entry = labels.entry(*record).or_insert_with(|| {
                    order.push(*record);
                    Vec::new()
                });
                entry.push(label.clone());
            }
        }

        let mut selected: Vec<Selected<'_>> = order
            .into_iter()
            .map(|record| {
                let mut record_labels = labels.remove(&record).unwrap_or_default();
                record_labels.sort();
                Selected {
                    record: &self.records[record],
                    labels: record_labels,
                }
            })
            .collect();
        selected.sort_by(|a, b| a.labels.cmp(&b.labels).then_with(|| a.record.name.cmp(&b.record.name)));
        selected
    }
}

fn collect_files(dir: &Path, verified: bool, out: &mut Vec<(PathBuf, bool)>) -> Result<(), BuildError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    out.extend(paths.into_iter().map(|path| (path, verified)));
    Ok(())
}
