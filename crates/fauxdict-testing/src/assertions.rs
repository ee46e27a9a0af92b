//! Assertions over the `{ badge, content, suggestions }` JSON envelope.

use anyhow::{Context, Result};
use serde_json::Value;

fn entries(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["entries"]
        .as_array()
        .context("Expected 'content.entries' array in JSON")
}

pub fn assert_entry_count(json: &Value, expected: usize) -> Result<()> {
    let entries = entries(json)?;
    if entries.len() != expected {
        anyhow::bail!("Expected {} entries, got {}", expected, entries.len());
    }
    Ok(())
}

/// Entry ids must be exactly `0..n` in order.
pub fn assert_sequential_ids(json: &Value) -> Result<()> {
    for (i, entry) in entries(json)?.iter().enumerate() {
        let id = entry["id"]
            .as_u64()
            .with_context(|| format!("Entry {} missing id", i))?;
        if id != i as u64 {
            anyhow::bail!("Entry {} has id {}", i, id);
        }
    }
    Ok(())
}

/// Every entry text contains `needle`, ignoring case.
pub fn assert_all_entries_contain(json: &Value, needle: &str) -> Result<()> {
    let needle = needle.to_lowercase();
    for (i, entry) in entries(json)?.iter().enumerate() {
        let text = entry["text"]
            .as_str()
            .with_context(|| format!("Entry {} missing text", i))?;
        if !text.to_lowercase().contains(&needle) {
            anyhow::bail!("Entry {} does not contain {:?}: {}", i, needle, text);
        }
    }
    Ok(())
}

pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;
    if level != expected {
        anyhow::bail!("Expected badge level {}, got {}", expected, level);
    }
    Ok(())
}
