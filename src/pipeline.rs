//! Batch generation: corpus in, metadata asset out.
//!
//! The corpus is loaded once into an immutable snapshot, classified (in
//! parallel with rayon unless configured otherwise), encoded with sorted
//! keys and written atomically. Nothing is written unless every earlier
//! stage succeeded.

use crate::assembler::{classify_with_source, ClassificationSource};
use crate::config::GeneratorConfig;
use crate::errors::{PipelineError, PipelineResult};
use crate::rules::format_description::Describe;
use rayon::prelude::*;
use schema::{AbilityMetadata, AbilityRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// The input document: `{ "abilities": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCorpus {
    pub abilities: Vec<AbilityRecord>,
}

/// One classified ability together with the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedAbility {
    pub metadata: AbilityMetadata,
    pub source: ClassificationSource,
}

pub fn load_corpus(path: &Path) -> PipelineResult<AbilityCorpus> {
    let content = fs::read_to_string(path).map_err(|source| PipelineError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    let corpus: AbilityCorpus =
        serde_json::from_str(&content).map_err(|source| PipelineError::DecodeInput {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), abilities = corpus.abilities.len(), "loaded ability corpus");
    Ok(corpus)
}

fn classify_one(record: &AbilityRecord) -> ClassifiedAbility {
    let (metadata, source) = classify_with_source(record);
    if source == ClassificationSource::Fallback {
        warn!(ability = %record.name, "no rule family matched, using fallback classification");
    }
    debug!(
        ability = %record.name,
        effects = metadata.effects.len(),
        source = ?source,
        "classified ability"
    );
    ClassifiedAbility { metadata, source }
}

/// Classify every record. Output order always matches input order.
pub fn classify_corpus(corpus: &AbilityCorpus, parallel: bool) -> Vec<ClassifiedAbility> {
    if parallel {
        corpus.abilities.par_iter().map(classify_one).collect()
    } else {
        corpus.abilities.iter().map(classify_one).collect()
    }
}

/// Pretty-printed JSON array with object keys in sorted order and a
/// trailing newline, so regenerations diff cleanly.
pub fn encode_metadata(metadata: &[AbilityMetadata]) -> PipelineResult<Vec<u8>> {
    // serde_json::Value objects are BTreeMap-backed, which sorts keys.
    let value = serde_json::to_value(metadata).map_err(PipelineError::EncodeOutput)?;
    let mut bytes = serde_json::to_vec_pretty(&value).map_err(PipelineError::EncodeOutput)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write the whole asset through a temp file in the target directory, then
/// move it into place.
pub fn write_output(path: &Path, bytes: &[u8]) -> PipelineResult<()> {
    let write_error = |source: std::io::Error| PipelineError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&directory).map_err(write_error)?;

    let mut file = NamedTempFile::new_in(&directory).map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)?;
    file.flush().map_err(write_error)?;
    file.persist(path).map_err(|err| write_error(err.error))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote ability metadata");
    Ok(())
}

/// A described example for the run summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryExample {
    pub name: String,
    pub descriptions: Vec<String>,
}

/// Counts and examples reported after a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub abilities: usize,
    pub effects: usize,
    pub signature_profiles: usize,
    pub fallback_only: usize,
    pub restricted: usize,
    pub output_path: PathBuf,
    pub examples: Vec<SummaryExample>,
}

impl RunSummary {
    pub fn from_classified(
        classified: &[ClassifiedAbility],
        output_path: &Path,
        example_count: usize,
    ) -> Self {
        let count_source = |wanted: ClassificationSource| {
            classified.iter().filter(|c| c.source == wanted).count()
        };
        Self {
            abilities: classified.len(),
            effects: classified.iter().map(|c| c.metadata.effects.len()).sum(),
            signature_profiles: count_source(ClassificationSource::Signature),
            fallback_only: count_source(ClassificationSource::Fallback),
            restricted: classified
                .iter()
                .filter(|c| c.metadata.species_restriction.is_some())
                .count(),
            output_path: output_path.to_path_buf(),
            examples: classified
                .iter()
                .take(example_count)
                .map(|c| SummaryExample {
                    name: c.metadata.name.clone(),
                    descriptions: c
                        .metadata
                        .effects
                        .iter()
                        .map(|effect| effect.describe().to_string())
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Load, classify, encode and write according to `config`.
pub fn run(config: &GeneratorConfig) -> PipelineResult<RunSummary> {
    let corpus = load_corpus(&config.input_path)?;
    let classified = classify_corpus(&corpus, config.parallel);
    info!(abilities = classified.len(), parallel = config.parallel, "classified corpus");

    let metadata: Vec<AbilityMetadata> = classified.iter().map(|c| c.metadata.clone()).collect();
    let bytes = encode_metadata(&metadata)?;
    write_output(&config.output_path, &bytes)?;

    Ok(RunSummary::from_classified(
        &classified,
        &config.output_path,
        config.summary_examples,
    ))
}
