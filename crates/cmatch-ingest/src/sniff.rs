//! CSV dialect sniffing.
//!
//! Infers the delimiter from a bounded content sample by scoring candidate
//! delimiters on field-count uniformity: the right delimiter splits every
//! sampled line into the same number of fields.

/// Bytes sampled from the head of the input for sniffing.
pub const SAMPLE_BYTES: usize = 100_000;

const CANDIDATE_DELIMITERS: &[u8] = b",;\t|";
const MAX_SAMPLE_LINES: usize = 64;

/// Delimiter and quote convention of a CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,
}

#[derive(Debug, Clone, Copy, Default)]
struct DelimiterStats {
    lines: usize,
    min_fields: usize,
    max_fields: usize,
    modal_fields: usize,
    modal_lines: usize,
}

impl DelimiterStats {
    fn uniform(self) -> bool {
        self.lines > 0 && self.min_fields == self.max_fields
    }

    fn modal_ratio(self) -> f64 {
        if self.lines == 0 {
            0.0
        } else {
            self.modal_lines as f64 / self.lines as f64
        }
    }
}

/// Number of fields a line splits into, honoring double-quote quoting.
fn field_count(line: &str, delimiter: u8) -> usize {
    let mut fields = 1usize;
    let mut in_quotes = false;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            fields += 1;
        }
    }
    fields
}

fn delimiter_stats(lines: &[&str], delimiter: u8) -> DelimiterStats {
    let mut counts = Vec::with_capacity(lines.len());
    for line in lines {
        counts.push(field_count(line, delimiter));
    }
    let mut stats = DelimiterStats {
        lines: counts.len(),
        min_fields: usize::MAX,
        ..DelimiterStats::default()
    };
    for &count in &counts {
        stats.min_fields = stats.min_fields.min(count);
        stats.max_fields = stats.max_fields.max(count);
        let occurrences = counts.iter().filter(|&&c| c == count).count();
        if occurrences > stats.modal_lines
            || (occurrences == stats.modal_lines && count > stats.modal_fields)
        {
            stats.modal_fields = count;
            stats.modal_lines = occurrences;
        }
    }
    stats
}

/// Infer the dialect of a CSV file from a head sample.
///
/// `truncated` marks a sample cut mid-file, in which case the final
/// (possibly partial) line is ignored.
///
/// # Errors
///
/// Returns a human-readable reason when no candidate delimiter splits the
/// sample consistently into two or more fields.
pub fn sniff_dialect(sample: &[u8], truncated: bool) -> Result<Dialect, String> {
    let text = String::from_utf8_lossy(sample);
    let mut lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .take(MAX_SAMPLE_LINES)
        .collect();
    if truncated && !text.ends_with('\n') {
        lines.pop();
    }
    if lines.is_empty() {
        return Err("no content to sample".to_string());
    }

    // Pass 1: a delimiter that splits every line identically wins; ties go
    // to the wider table, then to candidate order.
    let mut best: Option<(u8, DelimiterStats)> = None;
    for &candidate in CANDIDATE_DELIMITERS {
        let stats = delimiter_stats(&lines, candidate);
        if stats.uniform() && stats.min_fields >= 2 {
            match best {
                Some((_, current)) if stats.min_fields <= current.min_fields => {}
                _ => best = Some((candidate, stats)),
            }
        }
    }

    // Pass 2: tolerate a handful of ragged lines as long as a clear modal
    // field count exists.
    if best.is_none() {
        for &candidate in CANDIDATE_DELIMITERS {
            let stats = delimiter_stats(&lines, candidate);
            if stats.modal_fields >= 2 && stats.modal_ratio() >= 0.9 {
                match best {
                    Some((_, current)) if stats.modal_fields <= current.modal_fields => {}
                    _ => best = Some((candidate, stats)),
                }
            }
        }
    }

    match best {
        Some((delimiter, _)) => Ok(Dialect {
            delimiter,
            quote: b'"',
        }),
        None => Err("no delimiter splits the sample consistently".to_string()),
    }
}
