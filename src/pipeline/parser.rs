// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Source Parsers** - *Delimited Text Channel and Parameter Sources*
//!
//! Tolerant parsers for the two text grammars the pipeline consumes. Channel
//! data is optional at parse time, so channel parsing degrades to an empty
//! sequence with a diagnostic instead of failing. Parameter parsing likewise
//! degrades to an empty mapping; the pipeline itself decides which keys are
//! fatal when absent.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::errors::KernelError;
use crate::traits::element::ChannelElement;

/// Field delimiter shared by both source grammars.
const DELIMITER: char = ',';

fn read_source(path: &Path) -> Result<String, KernelError> {
    fs::read_to_string(path)
        .map_err(|err| KernelError::SourceUnavailable(format!("{}: {}", path.display(), err)))
}

/// Parses channel values from a delimited text source.
///
/// Grammar: one leading skip token before the first delimiter, then numeric
/// literals separated by the delimiter, appended in file order. Empty fields
/// (trailing delimiters, blank lines) are ignored. An unreadable source or a
/// malformed literal degrades the whole parse to an empty sequence with a
/// diagnostic; this function never fails.
pub fn parse_channels<T: ChannelElement>(path: &Path) -> Vec<T> {
    let contents = match read_source(path) {
        Ok(contents) => contents,
        Err(err) => {
            log::warn!("channel source degraded to empty sequence: {err}");
            return Vec::new();
        }
    };

    let mut fields = contents.split(DELIMITER);
    // Leading skip token before the first delimiter.
    let _ = fields.next();

    let mut channels = Vec::new();
    for field in fields {
        let field = field.trim();
        if field.is_empty() {
            continue;
        }
        match field.parse::<T>() {
            Ok(value) => channels.push(value),
            Err(_) => {
                log::warn!(
                    "malformed channel value {:?} in {}; degrading to empty sequence",
                    field,
                    path.display()
                );
                return Vec::new();
            }
        }
    }
    channels
}

/// Parses named parameters, one per line: `<single-character-name>, <value>`.
///
/// Duplicate names keep the last-seen value. Malformed lines are skipped with
/// a diagnostic; an unreadable source degrades to an empty mapping. This
/// function never fails — required-key enforcement happens at pipeline load.
pub fn parse_parameters<T: ChannelElement>(path: &Path) -> HashMap<char, T> {
    let mut parameters = HashMap::new();

    let contents = match read_source(path) {
        Ok(contents) => contents,
        Err(err) => {
            log::warn!("parameter source degraded to empty mapping: {err}");
            return parameters;
        }
    };

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((name, value)) = line.split_once(DELIMITER) else {
            log::warn!(
                "{}:{}: expected `<name>, <value>`; skipping line",
                path.display(),
                line_no + 1
            );
            continue;
        };

        let name = name.trim();
        let mut chars = name.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(key), None) => key,
            _ => {
                log::warn!(
                    "{}:{}: parameter names are single characters, got {:?}; skipping line",
                    path.display(),
                    line_no + 1,
                    name
                );
                continue;
            }
        };

        match value.trim().parse::<T>() {
            // Last-seen value wins for duplicate names.
            Ok(parsed) => {
                parameters.insert(key, parsed);
            }
            Err(_) => {
                log::warn!(
                    "{}:{}: malformed value {:?} for parameter '{}'; skipping line",
                    path.display(),
                    line_no + 1,
                    value.trim(),
                    key
                );
            }
        }
    }

    parameters
}
