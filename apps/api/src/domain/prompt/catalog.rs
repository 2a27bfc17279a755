// Built-in SEO prompt library
//
// Bodies stay in English regardless of the UI locale; only titles and
// timestamp labels are localized.

use std::collections::HashSet;

use super::prompt::{LocalizedText, PromptTemplate};
use super::value_objects::{Category, PromptId};
use crate::errors::{PrompterError, PrompterResult};

/// Ordered, immutable list of prompt templates
///
/// # Invariants
/// - Ids are unique within the catalog
/// - Order is the presentation order
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    prompts: Vec<PromptTemplate>,
}

impl PromptCatalog {
    /// Builds a catalog, rejecting duplicate ids
    pub fn new(prompts: Vec<PromptTemplate>) -> PrompterResult<Self> {
        let mut seen = HashSet::new();
        for prompt in &prompts {
            if !seen.insert(prompt.id()) {
                return Err(PrompterError::InvalidCatalog(format!(
                    "duplicate prompt id {}",
                    prompt.id()
                )));
            }
        }
        Ok(Self { prompts })
    }

    /// The catalog shipped with the application
    pub fn builtin() -> Self {
        Self {
            prompts: builtin_prompts(),
        }
    }

    pub fn prompts(&self) -> &[PromptTemplate] {
        &self.prompts
    }

    pub fn get(&self, id: PromptId) -> Option<&PromptTemplate> {
        self.prompts.iter().find(|prompt| prompt.id() == id)
    }

    /// Looks up a prompt by raw id, as it arrives from a request path
    pub fn find(&self, raw_id: u32) -> PrompterResult<&PromptTemplate> {
        PromptId::new(raw_id)
            .ok()
            .and_then(|id| self.get(id))
            .ok_or(PrompterError::PromptNotFound(raw_id))
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

fn builtin_prompts() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate::new(
            PromptId(1),
            "🔎",
            LocalizedText::new("Lokálny SERP & Content Gap Sken", "Local SERP & Content Gap Scan"),
            LocalizedText::new("pripravené", "ready"),
            "You are an SEO analyst. For keyword \"{{primary_keyword}}\" in city \"{{city}}\", audit the top-10 Google SERP. \n\
             Return JSON array with: rank, url, title, word_count, main_topics[], content_gaps[], intent(info/comm/local), link_profile(DR≈, RD≈), notes.\n\
             Then output a \"quick_wins\" list (≤5) for \"{{domain}}\" with fields: task, impact(1-5), effort(1-5), why_it_works.",
            Category::New,
        ),
        PromptTemplate::new(
            PromptId(2),
            "⚙️",
            LocalizedText::new("Rank Math Nastavenia + Schema Balík", "Rank Math Setup + Schema Pack"),
            LocalizedText::new("pred 15 min", "15 min ago"),
            "Act as a WordPress SEO engineer. For brand \"{{brand}}\", domain \"{{domain}}\", address \"{{address}}\", phone \"{{phone}}\":\n\
             1) Generate Rank Math recommended config (as JSON diff or checklist).\n\
             2) Output JSON-LD for Organization + LocalBusiness + Service (sk-SK), including geo, openingHours, sameAs.\n\
             3) Provide robots.txt and sitemap hints; canonical/HTTPS rules (Nginx + Apache variants) with exact snippets.\n\
             4) List 3 safety checks to avoid duplicate meta & schema.",
            Category::Urgent,
        ),
        PromptTemplate::new(
            PromptId(3),
            "📝",
            LocalizedText::new("Long-form Content Brief (sk-SK)", "Long-form Content Brief (en-US)"),
            LocalizedText::new("pred 1 h", "1 hr ago"),
            "Create an 1 800-word article brief for \"{{primary_keyword}}\" (locale sk-SK).\n\
             Deliver: \n\
             • Title options (CTR-focused) • Outline H1-H3 • PAA questions • Entities (EN/SK) • Internal_link_targets (slugs) • External_sources (3-5, trustworthy) • CTA ideas.\n\
             Append: FAQ schema (JSON-LD) + a CSV line: title, meta_title(60), meta_description(155), slug, canonical, h1.",
            Category::Success,
        ),
        PromptTemplate::new(
            PromptId(4),
            "⚡",
            LocalizedText::new("CWV Fix Blueprint (Next.js/React)", "CWV Fix Blueprint (Next.js/React)"),
            LocalizedText::new("pred 2 h", "2 hrs ago"),
            "Given URL \"{{url}}\" and stack \"{{stack}}\", propose code-level fixes to achieve LCP ≤ 1.8s, CLS < 0.1, INP < 200ms.\n\
             Output a table: metric, current(est), target, fixes(code), priority, est_gain.\n\
             Include snippets for: font preloads, next/image sizing, critical CSS, route-level dynamic import, cache headers, and a sample Lighthouse CI YAML.",
            Category::Default,
        ),
        PromptTemplate::new(
            PromptId(5),
            "📍",
            LocalizedText::new("Google Business Profile • Local Pack", "Google Business Profile • Local Pack"),
            LocalizedText::new("pred 3 h", "3 hrs ago"),
            "Prepare a GBP optimization package for \"{{brand}}\" (category \"{{primary_category}}\").\n\
             Return: primary/secondary categories, services list, 5 weekly post drafts (title, copy, CTA, photo_idea), Q&A (10), review reply templates (positive/neutral/negative), UTM scheme for links, and a NAP consistency checklist (site, schema, citations).",
            Category::Default,
        ),
    ]
}
