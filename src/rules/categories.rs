//! Built-in harm category tables
//!
//! The embedded moderation ruleset: per category, an operator description,
//! the detection patterns, and the message shown to a blocked user. Patterns
//! are compiled case-insensitively by the engine and are written with word
//! boundaries so that substrings of unrelated words do not match.
//!
//! Table order is the scan priority order and must mirror
//! [`Category::CHECK_ORDER`].

use crate::rules::Category;

/// One embedded category definition.
pub struct BuiltinCategory {
    pub category: Category,
    pub description: &'static str,
    pub patterns: &'static [&'static str],
    pub message: &'static str,
}

/// The embedded ruleset, in scan priority order.
pub const BUILTIN_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        category: Category::SelfHarm,
        description: "Suicide and self-injury",
        patterns: &[
            r"\b(commit|committing)\s+suicide\b",
            r"\bkill(ing)?\s+(myself|yourself|oneself|himself|herself|themselves)\b",
            r"\bend(ing)?\s+(my|your|his|her|their)\s+(own\s+)?life\b",
            r"\b(take|took|taking)\s+(my|your|his|her|their)\s+(own\s+)?life\b",
            r"\bsuicide\s+(method|methods|note|pact)\b",
            r"\bself\s*-?\s*harm\b",
            r"\b(hurt|hurting|harm|harming|cut|cutting)\s+(myself|yourself)\b",
            r"\boverdos(e|ing)\s+on\b",
            r"\bstarv(e|ing)\s+(myself|yourself)\b",
        ],
        message: "It sounds like this task may involve self-harm. We can't help \
                  with that, but support is available right now: call or text 988 \
                  (Suicide & Crisis Lifeline) or text HOME to 741741 (Crisis Text \
                  Line). You are not alone.",
    },
    BuiltinCategory {
        category: Category::ChildExploitation,
        description: "Sexual exploitation of minors",
        patterns: &[
            r"\bchild\s+(sexual\s+)?(abuse|exploitation)\s+(material|imagery|images?|content)\b",
            r"\bcsam\b",
            r"\b(child|minor|underage)\s+porn(ography)?\b",
            r"\bsexualiz(e|ed|ing)\s+(a\s+)?(child|children|minor|minors)\b",
            r"\b(sexual|explicit|nude|pornographic)\s+(content|material|images?|photos?|videos?)\s+(of|involving)\s+(a\s+)?(child|children|minors?|teens?|underage)\b",
            r"\bgroom(ing)?\s+(a\s+)?(child|children|minor|minors)\b",
        ],
        message: "This task appears to involve the sexual exploitation of minors \
                  and has been blocked. If you suspect a child is in danger, \
                  report it to the NCMEC CyberTipline at report.cybertip.org or \
                  call 1-800-843-5678.",
    },
    BuiltinCategory {
        category: Category::IllegalActivity,
        description: "Weapons, drugs, intrusion, and other criminal facilitation",
        patterns: &[
            r"\b(make|making|build|building|construct|constructing|assemble|assembling)\s+(a\s+|an\s+)?(bomb|pipe\s+bomb|explosive|explosives|ied|grenade)\b",
            r"\bhack(ing|ed)?\s+into\b",
            r"\bhack(ing|ed)?\s+(someone|somebody|anyone|another)('s)?\s+(account|email|phone|computer|device|network|password)s?\b",
            r"\b(steal|stealing)\s+(a\s+)?(car|credit\s+cards?|identit(y|ies)|passwords?)\b",
            r"\b(bypass|bypassing|crack|cracking)\s+(a\s+|the\s+)?(password|drm|license|activation|paywall)\b",
            r"\b(make|making|cook|cooking|synthesize|synthesizing|manufacture|manufacturing|produce|producing)\s+(meth|methamphetamine|fentanyl|heroin|cocaine|mdma|lsd)\b",
            r"\b(buy|buying|sell|selling)\s+illegal\s+(drugs|narcotics|firearms|weapons)\b",
            r"\b(untraceable|ghost)\s+(gun|firearm|weapon)\b",
            r"\b3d\s*-?\s*print(ed|ing)?\s+(a\s+)?(gun|firearm|suppressor)\b",
            r"\b(launder|laundering)\s+money\b",
            r"\bmoney\s+laundering\b",
            r"\bcounterfeit\s+(money|currency|cash|bills|documents)\b",
            r"\bfake\s+(id|ids|passport|driver'?s\s+licen[cs]e)\b",
            r"\b(write|writing|create|creating|build|building|make|making|develop|developing)\s+(a\s+)?(virus|malware|ransomware|keylogger|trojan|botnet|rootkit)\b",
            r"\b(launch|launching|perform|performing)\s+(a\s+)?ddos\b",
            r"\b(evade|evading)\s+taxes\b",
            r"\btax\s+evasion\b",
        ],
        message: "This task appears to request help with illegal activity and has \
                  been blocked. Nothing was executed.",
    },
    BuiltinCategory {
        category: Category::ViolenceAndThreats,
        description: "Violence against people or animals, and threats of it",
        patterns: &[
            r"\b(kill|killing|murder|murdering|shoot|shooting|stab|stabbing|strangle|strangling|assassinate|assassinating)\s+(someone|somebody|anyone|a\s+person|people|my\s+(neighbor|boss|co-?worker|wife|husband|girlfriend|boyfriend|ex|family|parents?|brother|sister|dog|cat))\b",
            r"\bhow\s+to\s+(hurt|harm|injure)\s+(someone|somebody|a\s+person)\b",
            r"\bget\s+away\s+with\s+(murder|killing)\b",
            r"\b(mass|school)\s+shooting\b",
            r"\bshoot(ing)?\s+up\s+(a\s+|the\s+)?(school|mall|church|office|concert)\b",
            r"\b(hire|hiring|find|finding)\s+a\s+hitman\b",
            r"\btorture\s+(someone|somebody|a\s+person|an?\s+animals?)\b",
            r"\bpoison(ing)?\s+(someone|somebody|my\s+\w+|the\s+water\s+supply)\b",
            r"\b(threaten|threatening|intimidate|intimidating)\s+(someone|somebody|a\s+person|my\s+\w+)\b",
            r"\b(beat|beating)\s+up\s+(someone|somebody|my\s+\w+)\b",
            r"\b(plan|planning|commit|committing)\s+(a\s+)?(terror(ist)?\s+attack|massacre|bombing)\b",
        ],
        message: "This task appears to involve violence or threats of harm against \
                  a person or animal and has been blocked.",
    },
    BuiltinCategory {
        category: Category::HateAndHarassment,
        description: "Hate speech, harassment, and doxxing",
        patterns: &[
            r"\b(write|writing|generate|generating|create|creating|compose|composing)\s+(a\s+|an\s+|some\s+)?(racist|sexist|homophobic|transphobic|antisemitic)\b",
            r"\b(write|writing|generate|generating|create|creating)\s+hate\s+speech\b",
            r"\b(racial|ethnic|homophobic)\s+slurs?\b",
            r"\b(harass|harassing|stalk|stalking)\s+(someone|somebody|a\s+person|my\s+ex)\b",
            r"\b(dox|doxx|doxing|doxxing)\b",
            r"\bcyberbully(ing)?\b",
            r"\b(bully|bullying)\s+(someone|somebody|a\s+(kid|child|classmate|co-?worker))\b",
        ],
        message: "This task appears to involve harassment or hateful content \
                  targeting a person or group and has been blocked.",
    },
    BuiltinCategory {
        category: Category::SpamAndFraud,
        description: "Phishing, scams, and bulk unsolicited messaging",
        patterns: &[
            r"\bphishing\s+(email|emails|page|site|website|message|campaign|kit)\b",
            r"\b(create|creating|write|writing|craft|crafting|design|designing)\s+(a\s+)?phishing\b",
            r"\b(ponzi|pyramid)\s+scheme\b",
            r"\b(romance|lottery|tech\s+support)\s+scam\b",
            r"\badvance\s*-?\s*fee\s+scam\b",
            r"\bscam(ming)?\s+(people|someone|somebody|victims?|the\s+elderly)\b",
            r"\b(send|sending)\s+(bulk|mass)\s+(unsolicited\s+)?(email|emails|messages|texts)\b",
            r"\bspam\s+(bot|bots|campaign|messages?|emails?|list)\b",
            r"\bfake\s+(reviews?|testimonials?|followers?|engagement)\b",
            r"\b(credit\s+card|wire|bank|insurance)\s+fraud\b",
            r"\bsteal(ing)?\s+credit\s+card\s+(numbers?|details|information)\b",
        ],
        message: "This task appears to involve scams, phishing, or bulk \
                  unsolicited messaging and has been blocked.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn compile(pattern: &str) -> regex::Regex {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .unwrap_or_else(|e| panic!("pattern '{pattern}' failed to compile: {e}"))
    }

    #[test]
    fn test_all_patterns_compile() {
        for entry in BUILTIN_CATEGORIES {
            for pattern in entry.patterns {
                compile(pattern);
            }
        }
    }

    #[test]
    fn test_tables_mirror_check_order() {
        let table_order: Vec<Category> = BUILTIN_CATEGORIES.iter().map(|c| c.category).collect();
        assert_eq!(table_order, Category::CHECK_ORDER.to_vec());
    }

    #[test]
    fn test_self_harm_message_lists_crisis_lines() {
        let entry = &BUILTIN_CATEGORIES[0];
        assert_eq!(entry.category, Category::SelfHarm);
        assert!(entry.message.contains("988"));
        assert!(entry.message.contains("741741"));
    }

    #[test]
    fn test_bomb_pattern_matches() {
        let re = compile(BUILTIN_CATEGORIES[2].patterns[0]);
        assert!(re.is_match("how to make a bomb"));
        assert!(re.is_match("building an explosive"));
        assert!(!re.is_match("that party was the bomb"));
    }

    #[test]
    fn test_suicide_pattern_matches_case_insensitively() {
        let re = compile(r"\b(commit|committing)\s+suicide\b");
        assert!(re.is_match("how to commit suicide"));
        assert!(re.is_match("HOW TO COMMIT SUICIDE"));
    }

    #[test]
    fn test_hack_account_pattern_matches() {
        let re = compile(
            r"\bhack(ing|ed)?\s+(someone|somebody|anyone|another)('s)?\s+(account|email|phone|computer|device|network|password)s?\b",
        );
        assert!(re.is_match("how to hack someone's account"));
        assert!(re.is_match("HOW TO HACK SOMEONE'S ACCOUNT"));
        assert!(!re.is_match("hackathon account setup"));
    }

    #[test]
    fn test_phishing_pattern_matches() {
        let re = compile(BUILTIN_CATEGORIES[5].patterns[0]);
        assert!(re.is_match("write a phishing email"));
        assert!(!re.is_match("report a phish to security"));
    }

    #[test]
    fn test_word_boundaries_hold() {
        // "assault" must not fire inside unrelated words, and category verbs
        // must not fire inside identifiers.
        let re = compile(r"\b(kill|killing)\s+(someone|somebody)\b");
        assert!(!re.is_match("overkill someone said"));
        assert!(re.is_match("kill someone"));
    }
}
