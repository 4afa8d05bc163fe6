//! Technical-context allowlist
//!
//! Recognizes benign engineering usage of verbs that also appear in harm
//! patterns ("kill a process", "drop the table"). A match here clears the
//! task before any category is consulted: the allowlist has absolute
//! precedence over every harm category. Over-blocking routine engineering
//! requests is treated as costlier than the residual risk of a crafted
//! technical phrasing, a trade-off the product owners signed off on.

use regex::{Regex, RegexBuilder};

/// Action verbs that are harmless when aimed at a technical object, with
/// their common inflections.
const ACTION_VERBS: &str = "kill(s|ed|ing)?|stop(s|ped|ping)?|terminat(e|es|ed|ing)|\
                            end(s|ed|ing)?|clos(e|es|ed|ing)|destroy(s|ed|ing)?|\
                            remov(e|es|ed|ing)|drop(s|ped|ping)?|poison(s|ed|ing)?";

/// Technical objects those verbs may legitimately act on.
const TECHNICAL_NOUNS: &str = "process(es)?|thread(s)?|task(s)?|job(s)?|container(s)?|\
                               pod(s)?|server(s)?|service(s)?|session(s)?|connection(s)?|\
                               socket(s)?|port(s)?|daemon(s)?|instance(s)?|vm(s)?|\
                               cluster(s)?|node(s)?|database(s)?|table(s)?|index(es)?|\
                               cache(s)?|queue(s)?|topic(s)?|partition(s)?|file(s)?|\
                               folder(s)?|director(y|ies)|branch(es)?|repo(s)?|\
                               repositor(y|ies)|window(s)?|tab(s)?|program(s)?|\
                               script(s)?|application(s)?|app(s)?|loop(s)?|timer(s)?|\
                               listener(s)?|watcher(s)?|handle(s)?|lock(s)?|mutex(es)?|\
                               transaction(s)?|shell(s)?|terminal(s)?|migration(s)?|\
                               deployment(s)?|namespace(s)?|volume(s)?|bucket(s)?|\
                               stack(s)?|environment(s)?|workspace(s)?|kernel(s)?|\
                               column(s)?|row(s)?";

/// The compiled technical-context pattern.
///
/// Shape: `verb (filler){0,4}? noun`. The filler span absorbs articles and
/// adjectives between verb and noun ("kill a zombie process") and is matched
/// non-greedily so the nearest technical noun wins.
#[derive(Debug)]
pub struct TechnicalContextAllowlist {
    pattern: Regex,
}

impl TechnicalContextAllowlist {
    /// Compile the composite pattern from the verb and noun tables.
    pub fn new() -> Self {
        let pattern = format!(
            r"\b(?:{ACTION_VERBS})\s+(?:[\w'-]+\s+){{0,4}}?(?:{TECHNICAL_NOUNS})\b"
        );
        let pattern = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .expect("technical-context allowlist pattern must compile");
        Self { pattern }
    }

    /// True when the text reads as an action on a technical object.
    pub fn is_safe_technical_context(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

impl Default for TechnicalContextAllowlist {
    fn default() -> Self {
        Self::new()
    }
}
