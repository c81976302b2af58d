//! Template labels per (shape, language). Content fields are never translated,
//! only the labels around them.

use crate::locale::Language;

/// Slot replaced with the teaching source in [`TeachingLabels::heading`].
pub const SOURCE_SLOT: &str = "{source}";
/// Slot replaced with the epic name in [`StoryLabels::heading`].
pub const EPIC_SLOT: &str = "{epic}";

#[derive(Debug)]
pub struct VerseLabels {
    pub heading: &'static str,
    pub translation: &'static str,
    pub context: &'static str,
    pub meaning: &'static str,
    pub apply: &'static str,
    pub closing: &'static str,
}

#[derive(Debug)]
pub struct TeachingLabels {
    /// Contains [`SOURCE_SLOT`].
    pub heading: &'static str,
    pub context: &'static str,
    pub lesson: &'static str,
    pub closing: &'static str,
}

#[derive(Debug)]
pub struct PrincipleLabels {
    pub explanation: &'static str,
    pub application: &'static str,
    pub closing: &'static str,
}

#[derive(Debug)]
pub struct QuoteLabels {
    pub heading: &'static str,
    /// Verb after the person's name ("said", "ने कहा").
    pub said: &'static str,
    pub context: &'static str,
    pub lesson: &'static str,
    pub closing: &'static str,
}

#[derive(Debug)]
pub struct StoryLabels {
    /// Contains [`EPIC_SLOT`].
    pub heading: &'static str,
    pub lesson: &'static str,
    pub apply: &'static str,
    pub insight: &'static str,
    pub closing: &'static str,
}

/// All labels for one language. `story` is `None` where no story labels are authored.
#[derive(Debug)]
pub struct TemplateLabels {
    pub verse: VerseLabels,
    pub teaching: TeachingLabels,
    pub principle: PrincipleLabels,
    pub quote: QuoteLabels,
    pub story: Option<StoryLabels>,
}

pub fn labels(lang: Language) -> &'static TemplateLabels {
    match lang {
        Language::En => &EN,
        Language::Hi => &HI,
        Language::Ta => &TA,
        Language::Te => &TE,
        Language::Pa => &PA,
        Language::Fr => &FR,
        Language::Es => &ES,
    }
}

/// Story labels for `lang`, falling back to English.
pub fn story_labels(lang: Language) -> &'static StoryLabels {
    labels(lang).story.as_ref().unwrap_or(&STORY_FALLBACK)
}

static STORY_FALLBACK: StoryLabels = EN_STORY;

const EN_STORY: StoryLabels = StoryLabels {
    heading: "Story from the {epic}",
    lesson: "Lesson",
    apply: "Apply this",
    insight: "Insight",
    closing: "Timeless stories carry timeless strength.",
};

static EN: TemplateLabels = TemplateLabels {
    verse: VerseLabels {
        heading: "Bhagavad Gita Wisdom",
        translation: "Translation",
        context: "Context",
        meaning: "What this means",
        apply: "Apply this",
        closing: "May this ancient wisdom guide your path.",
    },
    teaching: TeachingLabels {
        heading: "{source} Wisdom",
        context: "Context",
        lesson: "Lesson",
        closing: "Ancient wisdom for modern challenges.",
    },
    principle: PrincipleLabels {
        explanation: "Explanation",
        application: "Application",
        closing: "Ancient wisdom for modern well-being.",
    },
    quote: QuoteLabels {
        heading: "Inspiration",
        said: "said",
        context: "Context",
        lesson: "Lesson for you",
        closing: "You have the strength to overcome any challenge!",
    },
    story: Some(EN_STORY),
};

static HI: TemplateLabels = TemplateLabels {
    verse: VerseLabels {
        heading: "भगवद गीता का ज्ञान",
        translation: "अनुवाद",
        context: "संदर्भ",
        meaning: "इसका मतलब",
        apply: "इसे लागू करें",
        closing: "यह प्राचीन ज्ञान आपके मार्गदर्शन में सहायक हो।",
    },
    teaching: TeachingLabels {
        heading: "{source} ज्ञान",
        context: "संदर्भ",
        lesson: "सबक",
        closing: "आधुनिक चुनौतियों के लिए प्राचीन ज्ञान।",
    },
    principle: PrincipleLabels {
        explanation: "व्याख्या",
        application: "अनुप्रयोग",
        closing: "आधुनिक कल्याण के लिए प्राचीन ज्ञान।",
    },
    quote: QuoteLabels {
        heading: "प्रेरणा",
        said: "ने कहा",
        context: "संदर्भ",
        lesson: "आपके लिए सबक",
        closing: "आपमें किसी भी चुनौती पर काबू पाने की ताकत है!",
    },
    story: Some(StoryLabels {
        heading: "{epic} की कहानी",
        lesson: "सबक",
        apply: "इसे लागू करें",
        insight: "अंतर्दृष्टि",
        closing: "कालजयी कहानियों में कालजयी शक्ति होती है।",
    }),
};

static TA: TemplateLabels = TemplateLabels {
    verse: VerseLabels {
        heading: "பகவத் கீதை ஞானம்",
        translation: "மொழிபெயர்ப்பு",
        context: "சூழல்",
        meaning: "இதன் அர்த்தம்",
        apply: "இதைப் பயன்படுத்துங்கள்",
        closing: "இந்த பண்டைய ஞானம் உங்கள் பாதையை வழிநடத்தட்டும்।",
    },
    teaching: TeachingLabels {
        heading: "{source} ஞானம்",
        context: "சூழல்",
        lesson: "பாடம்",
        closing: "நவீன சவால்களுக்கான பண்டைய ஞானம்।",
    },
    principle: PrincipleLabels {
        explanation: "விளக்கம்",
        application: "பயன்பாடு",
        closing: "நவீன நல்வாழ்வுக்கான பண்டைய ஞானம்।",
    },
    quote: QuoteLabels {
        heading: "ஊக்கம்",
        said: "கூறினார்",
        context: "சூழல்",
        lesson: "உங்களுக்கான பாடம்",
        closing: "எந்த சவாலையும் சமாளிக்க உங்களுக்கு வலிமை உள்ளது!",
    },
    story: None,
};

static TE: TemplateLabels = TemplateLabels {
    verse: VerseLabels {
        heading: "భగవద్ గీతా జ్ఞానం",
        translation: "అనువాదం",
        context: "సందర్భం",
        meaning: "దీని అర్థం",
        apply: "దీన్ని వర్తింపజేయండి",
        closing: "ఈ పురాతన జ్ఞానం మీ మార్గాన్ని నడిపించనివ్వండి।",
    },
    teaching: TeachingLabels {
        heading: "{source} జ్ఞానం",
        context: "సందర్భం",
        lesson: "పాఠం",
        closing: "ఆధునిక సవాళ్లకు పురాతన జ్ఞానం।",
    },
    principle: PrincipleLabels {
        explanation: "వివరణ",
        application: "అనువర్తనం",
        closing: "ఆధునిక క్షేమం కోసం పురాతన జ్ఞానం।",
    },
    quote: QuoteLabels {
        heading: "ప్రేరణ",
        said: "అన్నారు",
        context: "సందర్భం",
        lesson: "మీ కోసం పాఠం",
        closing: "ఏ సవాళ్లను అధిగమించడానికి మీకు శక్తి ఉంది!",
    },
    story: None,
};

static PA: TemplateLabels = TemplateLabels {
    verse: VerseLabels {
        heading: "ਭਗਵਦ ਗੀਤਾ ਦਾ ਗਿਆਨ",
        translation: "ਅਨੁਵਾਦ",
        context: "ਸੰਦਰਭ",
        meaning: "ਇਸਦਾ ਮਤਲਬ",
        apply: "ਇਸਨੂੰ ਲਾਗੂ ਕਰੋ",
        closing: "ਇਹ ਪੁਰਾਣਾ ਗਿਆਨ ਤੁਹਾਡੇ ਰਸਤੇ ਦੀ ਅਗਵਾਈ ਕਰੇ।",
    },
    teaching: TeachingLabels {
        heading: "{source} ਗਿਆਨ",
        context: "ਸੰਦਰਭ",
        lesson: "ਸਬਕ",
        closing: "ਆਧੁਨਿਕ ਚੁਣੌਤੀਆਂ ਲਈ ਪੁਰਾਣਾ ਗਿਆਨ।",
    },
    principle: PrincipleLabels {
        explanation: "ਵਿਆਖਿਆ",
        application: "ਅਨੁਪ੍ਰਯੋਗ",
        closing: "ਆਧੁਨਿਕ ਤੰਦਰੁਸਤੀ ਲਈ ਪੁਰਾਣਾ ਗਿਆਨ।",
    },
    quote: QuoteLabels {
        heading: "ਪ੍ਰੇਰਣਾ",
        said: "ਨੇ ਕਿਹਾ",
        context: "ਸੰਦਰਭ",
        lesson: "ਤੁਹਾਡੇ ਲਈ ਸਬਕ",
        closing: "ਤੁਹਾਡੇ ਵਿੱਚ ਕਿਸੇ ਵੀ ਚੁਣੌਤੀ 'ਤੇ ਕਾਬੂ ਪਾਉਣ ਦੀ ਤਾਕਤ ਹੈ!",
    },
    story: None,
};

static FR: TemplateLabels = TemplateLabels {
    verse: VerseLabels {
        heading: "Sagesse de la Bhagavad Gita",
        translation: "Traduction",
        context: "Contexte",
        meaning: "Ce que cela signifie",
        apply: "Appliquez ceci",
        closing: "Que cette sagesse ancienne guide votre chemin.",
    },
    teaching: TeachingLabels {
        heading: "Sagesse {source}",
        context: "Contexte",
        lesson: "Leçon",
        closing: "Sagesse ancienne pour les défis modernes.",
    },
    principle: PrincipleLabels {
        explanation: "Explication",
        application: "Application",
        closing: "Sagesse ancienne pour le bien-être moderne.",
    },
    quote: QuoteLabels {
        heading: "Inspiration",
        said: "a dit",
        context: "Contexte",
        lesson: "Leçon pour vous",
        closing: "Vous avez la force de surmonter n'importe quel défi!",
    },
    story: Some(StoryLabels {
        heading: "Histoire du {epic}",
        lesson: "Leçon",
        apply: "Appliquez ceci",
        insight: "Aperçu",
        closing: "Les histoires intemporelles portent une force intemporelle.",
    }),
};

static ES: TemplateLabels = TemplateLabels {
    verse: VerseLabels {
        heading: "Sabiduría del Bhagavad Gita",
        translation: "Traducción",
        context: "Contexto",
        meaning: "Lo que esto significa",
        apply: "Aplica esto",
        closing: "Que esta sabiduría antigua guíe tu camino.",
    },
    teaching: TeachingLabels {
        heading: "Sabiduría {source}",
        context: "Contexto",
        lesson: "Lección",
        closing: "Sabiduría antigua para desafíos modernos.",
    },
    principle: PrincipleLabels {
        explanation: "Explicación",
        application: "Aplicación",
        closing: "Sabiduría antigua para el bienestar moderno.",
    },
    quote: QuoteLabels {
        heading: "Inspiración",
        said: "dijo",
        context: "Contexto",
        lesson: "Lección para ti",
        closing: "¡Tienes la fuerza para superar cualquier desafío!",
    },
    story: Some(StoryLabels {
        heading: "Historia del {epic}",
        lesson: "Lección",
        apply: "Aplica esto",
        insight: "Reflexión",
        closing: "Las historias eternas guardan una fuerza eterna.",
    }),
};
