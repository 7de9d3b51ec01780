//! Summary Blocks
//!
//! Splits a markdown research summary into display blocks for the token
//! cards. Only headings, bullet items and paragraphs are recognised; inline
//! markup is stripped where it is properly paired.

/// One display block of a summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryBlock {
    Heading { level: u8, text: String },
    Bullet(String),
    Paragraph(String),
}

/// Parse a markdown summary into blocks
pub fn parse_summary(markdown: &str) -> Vec<SummaryBlock> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in markdown.lines().map(str::trim) {
        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        if let Some((level, text)) = heading(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(SummaryBlock::Heading {
                level,
                text: strip_inline(text),
            });
        } else if let Some(item) = bullet(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(SummaryBlock::Bullet(strip_inline(item)));
        } else {
            paragraph.push(line);
        }
    }
    flush_paragraph(&mut paragraph, &mut blocks);

    blocks
}

/// First paragraph of a summary, for the collapsed card
pub fn excerpt(markdown: &str, max_chars: usize) -> String {
    let first = parse_summary(markdown).into_iter().find_map(|block| match block {
        SummaryBlock::Paragraph(text) | SummaryBlock::Bullet(text) => Some(text),
        SummaryBlock::Heading { .. } => None,
    });

    let text = first.unwrap_or_default();
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<SummaryBlock>) {
    if lines.is_empty() {
        return;
    }
    blocks.push(SummaryBlock::Paragraph(strip_inline(&lines.join(" "))));
    lines.clear();
}

fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') {
        return None;
    }
    Some((hashes as u8, rest.trim()))
}

fn bullet(line: &str) -> Option<&str> {
    for marker in ["- ", "* ", "+ "] {
        if let Some(item) = line.strip_prefix(marker) {
            return Some(item.trim());
        }
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(item) = line[digits..].strip_prefix(". ") {
            return Some(item.trim());
        }
    }
    None
}

fn strip_inline(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        let consumed = match ch {
            '`' => code_span(&chars, i, &mut out),
            '*' | '_' => emphasis(&chars, i, &mut out),
            '[' => link(&chars, i, &mut out),
            _ => None,
        };

        match consumed {
            Some(next) => i = next,
            None => {
                out.push(ch);
                i += 1;
            }
        }
    }

    out
}

/// `code` keeps its content verbatim
fn code_span(chars: &[char], start: usize, out: &mut String) -> Option<usize> {
    let close = start + 1 + chars[start + 1..].iter().position(|c| *c == '`')?;
    if close == start + 1 {
        return None;
    }
    out.extend(&chars[start + 1..close]);
    Some(close + 1)
}

/// *x*, **x**, _x_ and __x__ opened at a word boundary with a matching closer
fn emphasis(chars: &[char], start: usize, out: &mut String) -> Option<usize> {
    let delim = chars[start];
    let len = if chars.get(start + 1) == Some(&delim) { 2 } else { 1 };

    if start > 0 && chars[start - 1].is_alphanumeric() {
        return None;
    }
    let first = *chars.get(start + len)?;
    if first.is_whitespace() || first == delim {
        return None;
    }

    let mut j = start + len + 1;
    while j + len <= chars.len() {
        let is_run = chars[j..j + len].iter().all(|c| *c == delim)
            && chars.get(j + len) != Some(&delim)
            && chars[j - 1] != delim;
        let closes = is_run
            && !chars[j - 1].is_whitespace()
            && chars.get(j + len).map_or(true, |c| !c.is_alphanumeric());
        if closes {
            let inner: String = chars[start + len..j].iter().collect();
            out.push_str(&strip_inline(&inner));
            return Some(j + len);
        }
        j += 1;
    }
    None
}

/// [label](target) keeps only the label
fn link(chars: &[char], start: usize, out: &mut String) -> Option<usize> {
    let label_end = start + 1 + chars[start + 1..].iter().position(|c| *c == ']')?;
    if chars.get(label_end + 1) != Some(&'(') {
        return None;
    }
    let target_end = label_end + 2 + chars[label_end + 2..].iter().position(|c| *c == ')')?;

    let label: String = chars[start + 1..label_end].iter().collect();
    out.push_str(&strip_inline(&label));
    Some(target_end + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_blocks() {
        let md = "## Overview\nBitcoin is the **largest**\nnetwork by value.\n\n- Fixed supply\n* Proof of work\n1. Halving every 4 years\n\nClosing note.";
        let blocks = parse_summary(md);

        assert_eq!(
            blocks,
            vec![
                SummaryBlock::Heading {
                    level: 2,
                    text: "Overview".to_string()
                },
                SummaryBlock::Paragraph("Bitcoin is the largest network by value.".to_string()),
                SummaryBlock::Bullet("Fixed supply".to_string()),
                SummaryBlock::Bullet("Proof of work".to_string()),
                SummaryBlock::Bullet("Halving every 4 years".to_string()),
                SummaryBlock::Paragraph("Closing note.".to_string()),
            ]
        );
    }

    #[test]
    fn test_hash_without_space_is_text() {
        let blocks = parse_summary("#1 by market cap");
        assert_eq!(
            blocks,
            vec![SummaryBlock::Paragraph("#1 by market cap".to_string())]
        );
    }

    #[test]
    fn test_links_keep_label() {
        let blocks = parse_summary("See [whitepaper](https://bitcoin.org/bitcoin.pdf) for `details`.");
        assert_eq!(
            blocks,
            vec![SummaryBlock::Paragraph("See whitepaper for details.".to_string())]
        );
    }

    #[test]
    fn test_unpaired_markers_are_text() {
        let text = "Tracks the ETH_USD pair; supply grows 2 * 3 percent.";
        assert_eq!(
            parse_summary(text),
            vec![SummaryBlock::Paragraph(text.to_string())]
        );

        let text = "Fees paid in `gas and *some* snake_case_names stay.";
        assert_eq!(
            parse_summary(text),
            vec![SummaryBlock::Paragraph(
                "Fees paid in `gas and some snake_case_names stay.".to_string()
            )]
        );
    }

    #[test]
    fn test_unclosed_link_is_text() {
        let text = "See [docs](https://docs.example.com and more";
        assert_eq!(
            parse_summary(text),
            vec![SummaryBlock::Paragraph(text.to_string())]
        );

        let text = "Ranked [1] of 10";
        assert_eq!(
            parse_summary(text),
            vec![SummaryBlock::Paragraph(text.to_string())]
        );
    }

    #[test]
    fn test_nested_emphasis() {
        assert_eq!(
            parse_summary("A **_very_ large** cap and __bold__ claims"),
            vec![SummaryBlock::Paragraph("A very large cap and bold claims".to_string())]
        );
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("# Title\n\nShort text.", 50), "Short text.");
        assert_eq!(excerpt("abcdefghij", 4), "abcd…");
        assert_eq!(excerpt("", 10), "");
    }
}
