//! Line-scanning state machine over a dispatch region.
//!
//! Every line is cut at the profile's comment marker (and block marker, when
//! set) and trimmed before any marker check. A line that flips the state is
//! not itself searched for a case label.

use crate::dialects::ScanProfile;

use super::operators::OperatorList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Off,
    ScanningDispatchRegion,
}

/// What a single line did to the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    Ignored,
    RegionStart,
    RegionEnd,
    Label(String),
}

pub struct LineScanner<'p> {
    profile: &'p ScanProfile,
    state: ScanState,
}

impl<'p> LineScanner<'p> {
    pub fn new(profile: &'p ScanProfile) -> Self {
        Self {
            profile,
            state: ScanState::Off,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn feed(&mut self, raw: &str) -> LineEvent {
        let line = self.strip(raw);

        if line.contains(self.profile.start_marker.as_str()) {
            self.state = ScanState::ScanningDispatchRegion;
            return LineEvent::RegionStart;
        }

        if let Some(end) = &self.profile.end_marker {
            if line.contains(end.as_str()) {
                let was_scanning = self.state == ScanState::ScanningDispatchRegion;
                self.state = ScanState::Off;
                return if was_scanning {
                    LineEvent::RegionEnd
                } else {
                    LineEvent::Ignored
                };
            }
        }

        if self.state == ScanState::Off {
            return LineEvent::Ignored;
        }

        match self.label(line) {
            Some(name) => LineEvent::Label(name.to_string()),
            None => LineEvent::Ignored,
        }
    }

    fn strip<'l>(&self, raw: &'l str) -> &'l str {
        let mut line = cut_at(raw, &self.profile.comment_marker);
        if let Some(block) = &self.profile.block_marker {
            line = cut_at(line, block);
        }
        line.trim()
    }

    fn label<'l>(&self, line: &'l str) -> Option<&'l str> {
        let marker = self.profile.case_marker.as_str();
        let at = line.find(marker)?;

        if let Some(exclude) = &self.profile.exclude_marker {
            if line.contains(exclude.as_str()) {
                return None;
            }
        }

        let quote = self.profile.quote;
        let rest = &line[at + marker.len()..];
        let open = rest.find(quote)?;
        let rest = &rest[open + quote.len_utf8()..];
        let close = rest.find(quote)?;
        let name = &rest[..close];

        (!name.is_empty()).then_some(name)
    }
}

fn cut_at<'l>(line: &'l str, marker: &str) -> &'l str {
    if marker.is_empty() {
        return line;
    }
    match line.find(marker) {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Scans `content` line by line and returns the frozen operator list.
pub fn scan(content: &str, profile: &ScanProfile) -> OperatorList {
    let mut scanner = LineScanner::new(profile);
    let mut names = Vec::new();
    let mut regions = 0usize;

    for (i, line) in content.lines().enumerate() {
        match scanner.feed(line) {
            LineEvent::RegionStart => {
                regions += 1;
                tracing::debug!("dispatch region opened at line {}", i + 1);
            }
            LineEvent::RegionEnd => {
                tracing::debug!("dispatch region closed at line {}", i + 1);
            }
            LineEvent::Label(name) => names.push(name),
            LineEvent::Ignored => {}
        }
    }

    if regions == 0 {
        tracing::warn!(
            "no dispatch region found (start marker {:?})",
            profile.start_marker
        );
    }

    OperatorList::from_names(names)
}
