use crate::error::LatebindError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceOperation {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

// Operations must be sorted by start and non-overlapping (end[i] <= start[i+1]).
// Offsets are byte offsets into `code`; a violation is a caller bug, never user input.
pub fn splice_many(code: &str, operations: &[SpliceOperation]) -> Result<String, LatebindError> {
    let mut out = String::with_capacity(code.len());
    let mut end_prev = 0usize;
    for operation in operations {
        if operation.start < end_prev || operation.end < operation.start {
            return Err(LatebindError::Internal {
                message: format!(
                    "splice operations out of order: got {}..{} after offset {end_prev}",
                    operation.start, operation.end
                ),
            });
        }
        let untouched = code
            .get(end_prev..operation.start)
            .ok_or_else(|| invalid_range(end_prev, operation.start, code))?;
        out.push_str(untouched);
        out.push_str(&operation.replacement);
        end_prev = operation.end;
    }
    let tail = code
        .get(end_prev..)
        .ok_or_else(|| invalid_range(end_prev, code.len(), code))?;
    out.push_str(tail);
    Ok(out)
}

fn invalid_range(start: usize, end: usize, code: &str) -> LatebindError {
    LatebindError::Internal {
        message: format!(
            "splice range {start}..{end} is not valid for a source of {} bytes",
            code.len()
        ),
    }
}
