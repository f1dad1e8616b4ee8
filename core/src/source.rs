//! Corpus files: a JSON array of records, a single JSON record, JSON lines,
//! or a directory holding any of those.

use crate::corpus::{Corpus, RawDocument};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Load every record under `path`. Directory entries are read in path order.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawDocument>> {
    let path = path.as_ref();
    let mut files: Vec<PathBuf> = Vec::new();
    if path.is_dir() {
        for entry in WalkDir::new(path).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(extension(p), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if path.is_file() {
        files.push(path.to_path_buf());
    } else {
        anyhow::bail!("corpus path {} does not exist", path.display());
    }

    let mut records = Vec::new();
    for file in files {
        let loaded = if extension(&file) == Some("jsonl") { load_jsonl(&file) } else { load_json(&file) };
        records.extend(loaded.with_context(|| format!("reading corpus file {}", file.display()))?);
    }
    tracing::info!(path = %path.display(), records = records.len(), "loaded corpus");
    Ok(records)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|s| s.to_str())
}

pub fn load_jsonl(file: &Path) -> Result<Vec<RawDocument>> {
    let reader = BufReader::new(File::open(file)?);
    let mut records = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).with_context(|| format!("line {}", n + 1))?;
        records.push(record);
    }
    Ok(records)
}

pub fn load_json(file: &Path) -> Result<Vec<RawDocument>> {
    let reader = BufReader::new(File::open(file)?);
    let json: serde_json::Value = serde_json::from_reader(reader)?;
    let records = match json {
        serde_json::Value::Array(arr) => {
            arr.into_iter().map(serde_json::from_value).collect::<Result<Vec<RawDocument>, _>>()?
        }
        serde_json::Value::Object(_) => vec![serde_json::from_value(json)?],
        _ => anyhow::bail!("expected a JSON array or object"),
    };
    Ok(records)
}

/// Write the normalized documents of `corpus` to `path` as one JSON object.
pub fn save_preprocessed<P: AsRef<Path>>(corpus: &Corpus, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &corpus.preprocessed())?;
    writer.flush()?;
    tracing::info!(path = %path.display(), documents = corpus.len(), skipped = corpus.skipped, "saved preprocessed corpus");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_array_object_and_lines() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.json"), r#"[{"text": "one"}, {"body": "two", "id": "x"}]"#).unwrap();
        fs::write(dir.path().join("b.json"), r#"{"text": "three"}"#).unwrap();
        fs::write(dir.path().join("c.jsonl"), "{\"text\": \"four\"}\n\n{\"text\": \"five\"}\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let texts: Vec<String> = load_path(dir.path()).unwrap().into_iter().map(|r| r.text).collect();
        assert_eq!(texts, vec!["one", "two", "three", "four", "five"]);
    }

    #[test]
    fn single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("docs.json");
        fs::write(&file, r#"[{"text": "tropical fish"}]"#).unwrap();
        assert_eq!(load_path(&file).unwrap().len(), 1);
    }

    #[test]
    fn reports_bad_records() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bad.jsonl");
        fs::write(&file, "{\"text\": \"ok\"}\n{\"title\": \"no text\"}\n").unwrap();
        let err = load_path(&file).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn saves_preprocessed_documents() {
        use crate::{ingest, DocIdAllocator, Preprocessor, PreprocessorConfig};

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.jsonl");
        fs::write(&input, "{\"id\": \"a\", \"text\": \"deep blue ocean\"}\n{\"id\": \"b\", \"text\": \"tropical fish\"}\n")
            .unwrap();
        let p = Preprocessor::new(PreprocessorConfig::english()).unwrap();
        let corpus = ingest(load_path(&input).unwrap(), &p, &DocIdAllocator::new()).unwrap();

        let output = dir.path().join("preprocessed.json");
        save_preprocessed(&corpus, &output).unwrap();
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        let docs = json["documents"].as_array().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1]["doc_id"], 1);
        assert_eq!(docs[1]["external_id"], "b");
        assert_eq!(docs[0]["terms"], serde_json::json!(["deep", "blu", "ocean"]));
        assert_eq!(json["skipped"], 0);
    }

    #[test]
    fn missing_path() {
        assert!(load_path("/nonexistent/corpus.json").is_err());
    }
}
