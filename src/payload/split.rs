use serde::de::IgnoredAny;

/// Splits file content into trimmed, non-empty payload candidates.
///
/// Blank-line separated blocks are preferred. A single block is kept as is
/// when it is one well-formed JSON document; otherwise content with fewer than
/// two blocks is split into individual non-blank lines instead.
#[must_use]
pub fn split_candidates(content: &str) -> Vec<String> {
    let blocks = split_blocks(content);
    if blocks.len() >= 2 {
        return blocks;
    }
    if let [block] = blocks.as_slice()
        && is_valid_payload(block)
    {
        return blocks;
    }

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

fn split_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            push_block(&mut blocks, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_block(&mut blocks, &current);
    blocks
}

fn push_block(blocks: &mut Vec<String>, lines: &[&str]) {
    let block = lines.join("\n");
    let trimmed = block.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_owned());
    }
}

/// Returns true when `candidate` is a single well-formed JSON document.
#[must_use]
pub fn is_valid_payload(candidate: &str) -> bool {
    serde_json::from_str::<IgnoredAny>(candidate).is_ok()
}
