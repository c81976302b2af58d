//! Response composer: renders a wisdom entry as a labelled Markdown reply.
//!
//! The template is chosen by the entry's shape (exhaustive match, so a new
//! shape does not compile until it has a template). Labels come from the
//! requested language with English as the fallback; entry fields are copied
//! verbatim.

pub mod templates;

use crate::knowledge::{EntryBody, Principle, Quote, Story, Teaching, Verse, WisdomEntry};
use crate::locale::Language;
use templates::{labels, story_labels, EPIC_SLOT, SOURCE_SLOT};

/// Renders `entry` with labels for `lang`.
pub fn compose(entry: &WisdomEntry, lang: Language) -> String {
    match &entry.body {
        EntryBody::Verse(v) => verse(v, lang),
        EntryBody::Teaching(t) => teaching(t, lang),
        EntryBody::Principle(p) => principle(p, lang),
        EntryBody::Quote(q) => quote(q, lang),
        EntryBody::Story(s) => story(s, lang),
    }
}

fn verse(v: &Verse, lang: Language) -> String {
    let l = &labels(lang).verse;
    format!(
        "📖 **{}:**\n\n*{}*\n\n— {}\n\n**{}:** {}\n\n**{}:** {}\n\n**{}:** {}\n\n**{}:** {}\n\n🙏 {}",
        l.heading,
        v.text,
        v.reference,
        l.translation,
        v.translation,
        l.context,
        v.context,
        l.meaning,
        v.meaning,
        l.apply,
        v.application,
        l.closing,
    )
}

fn teaching(t: &Teaching, lang: Language) -> String {
    let l = &labels(lang).teaching;
    format!(
        "📚 **{}:**\n\n*\"{}\"*\n\n**{}:** {}\n\n**{}:** {}\n\n🙏 {}",
        l.heading.replacen(SOURCE_SLOT, &t.source, 1),
        t.quote,
        l.context,
        t.context,
        l.lesson,
        t.lesson,
        l.closing,
    )
}

fn principle(p: &Principle, lang: Language) -> String {
    let l = &labels(lang).principle;
    format!(
        "🧘 **{}:**\n\n**{}**\n\n**{}:** {}\n\n**{}:** {}\n\n💡 {}",
        p.name, p.principle, l.explanation, p.explanation, l.application, p.application, l.closing,
    )
}

fn quote(q: &Quote, lang: Language) -> String {
    let l = &labels(lang).quote;
    format!(
        "🌟 **{}:**\n\n**{}** {}:\n*\"{}\"*\n\n**{}:** {}\n\n**{}:** {}\n\n💪 {}",
        l.heading, q.person, l.said, q.quote, l.context, q.context, l.lesson, q.lesson, l.closing,
    )
}

fn story(s: &Story, lang: Language) -> String {
    let l = story_labels(lang);
    format!(
        "📜 **{}: {}**\n\n**{}:** {}\n\n**{}:** {}\n\n**{}:** {}\n\n🙏 {}",
        l.heading.replacen(EPIC_SLOT, &s.epic, 1),
        s.title,
        l.lesson,
        s.lesson,
        l.apply,
        s.application,
        l.insight,
        s.insight,
        l.closing,
    )
}
