//! Per-language reply strings for the fixed (non-dataset) replies.
//!
//! Wisdom template labels live in `composer::templates`; this module holds
//! the crisis, greeting, fallback and prompt texts. Any language code we have
//! no strings for resolves to English.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authored languages. Unknown codes resolve to [`Language::En`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Hi,
    Ta,
    Te,
    Pa,
    Fr,
    Es,
}

impl Language {
    /// Trims and lowercases `code`; unknown codes fall back to English.
    pub fn resolve(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "hi" => Language::Hi,
            "ta" => Language::Ta,
            "te" => Language::Te,
            "pa" => Language::Pa,
            "fr" => Language::Fr,
            "es" => Language::Es,
            _ => Language::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Pa => "pa",
            Language::Fr => "fr",
            Language::Es => "es",
        }
    }

    pub fn all() -> [Self; 7] {
        [
            Self::En,
            Self::Hi,
            Self::Ta,
            Self::Te,
            Self::Pa,
            Self::Fr,
            Self::Es,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Placeholder substituted with the user's text in [`LocaleStrings::prompt`].
pub const MESSAGE_SLOT: &str = "{message}";

/// Fixed replies for one language.
#[derive(Debug)]
pub struct LocaleStrings {
    pub crisis: &'static str,
    pub greetings: [&'static str; 4],
    /// Generator configured but the call failed or timed out.
    pub generator_failed: &'static str,
    /// No generator configured.
    pub generator_offline: &'static str,
    /// Reply for a blank message (answered before the engine runs).
    pub empty_input: &'static str,
    pub technical_difficulty: &'static str,
    /// Normal-mode instruction prompt containing [`MESSAGE_SLOT`].
    pub prompt: &'static str,
}

impl LocaleStrings {
    /// Prompt with the user text substituted once.
    pub fn render_prompt(&self, message: &str) -> String {
        self.prompt.replacen(MESSAGE_SLOT, message, 1)
    }
}

/// Strings for `lang`.
pub fn strings(lang: Language) -> &'static LocaleStrings {
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

/// Strings for a raw language code, falling back to English.
pub fn strings_for(code: &str) -> &'static LocaleStrings {
    strings(Language::resolve(code))
}

static EN: LocaleStrings = LocaleStrings {
    crisis: "🚨 I'm concerned about you. Please reach out immediately:\n• AASRA: +91-22-27546669\n• Sneha: +91-44-24640050\n• Emergency: 112\n\nYou're not alone. Help is available.",
    greetings: [
        "Hello! I'm Sakha.ai 😊 How are you feeling today?",
        "Hi there! 👋 I'm here to support you. What's on your mind?",
        "Namaste! 🙏 I'm your wellness companion. How can I help?",
        "Hey! 💜 Good to see you. How's your day going?",
    ],
    generator_failed: "I'm here to support you through whatever you're going through. 💜",
    generator_offline: "I'm here to support you. 💜",
    empty_input: "Hi! I'm Sakha.ai, your compassionate companion. How are you feeling today?",
    technical_difficulty: "I'm experiencing some technical difficulties, but I'm still here for you. Please try again.",
    prompt: "You are Sakha.ai, a compassionate mental health and wellness companion.
Respond to: \"{message}\"

Guidelines:
- Be warm, supportive, and empathetic
- Keep responses conversational and helpful
- Focus on mental health support and wellness
- Be encouraging but not preachy
- Use emojis sparingly and appropriately",
};

static HI: LocaleStrings = LocaleStrings {
    crisis: "🚨 मैं आपकी चिंता कर रहा हूं। कृपया तुरंत संपर्क करें:\n• आसरा: +91-22-27546669\n• स्नेहा: +91-44-24640050\n• आपातकाल: 112\n\nआप अकेले नहीं हैं। मदद उपलब्ध है।",
    greetings: [
        "नमस्ते! मैं Sakha.ai हूं 😊 आज आप कैसा महसूस कर रहे हैं?",
        "हैलो! 👋 मैं आपका समर्थन करने के लिए यहां हूं। आपके मन में क्या है?",
        "नमस्ते! 🙏 मैं आपका कल्याण साथी हूं। मैं कैसे मदद कर सकता हूं?",
        "अरे! 💜 आपको देखकर अच्छा लगा। आपका दिन कैसा चल रहा है?",
    ],
    generator_failed: "मैं आपके साथ हूं, चाहे आप कुछ भी कर रहे हों। 💜",
    generator_offline: "मैं आपका समर्थन करने के लिए यहां हूं। 💜",
    empty_input: "नमस्ते! मैं Sakha.ai हूं, आपका दयालु साथी। आज आप कैसा महसूस कर रहे हैं?",
    technical_difficulty: "मुझे कुछ तकनीकी कठिनाइयों का सामना करना पड़ रहा है, लेकिन मैं अभी भी आपके साथ हूं। कृपया फिर से कोशिश करें।",
    prompt: "आप Sakha.ai हैं, एक दयालु मानसिक स्वास्थ्य और कल्याण साथी।
इस पर प्रतिक्रिया दें: \"{message}\"

दिशानिर्देश:
- गर्म, सहायक और सहानुभूतिपूर्ण बनें
- बातचीत को सहायक और मददगार रखें
- मानसिक स्वास्थ्य सहायता और कल्याण पर ध्यान दें
- प्रोत्साहित करें लेकिन उपदेशात्मक न बनें
- इमोजी का कम उपयोग करें",
};

static TA: LocaleStrings = LocaleStrings {
    crisis: "🚨 நான் உங்களைப் பற்றி கவலைப்படுகிறேன். தயவுசெய்து உடனடியாக தொடர்பு கொள்ளுங்கள்:\n• ஆஸ்ரா: +91-22-27546669\n• ஸ்நேஹா: +91-44-24640050\n• அவசரகாலம்: 112\n\nநீங்கள் தனியாக இல்லை. உதவி கிடைக்கிறது.",
    greetings: [
        "வணக்கம்! நான் Sakha.ai 😊 இன்று நீங்கள் எப்படி உணருகிறீர்கள்?",
        "வணக்கம்! 👋 நான் உங்களை ஆதரிக்க இங்கே இருக்கிறேன். உங்கள் மனதில் என்ன இருக்கிறது?",
        "நமஸ்காரம்! 🙏 நான் உங்கள் நல்வாழ்வு துணை. நான் எப்படி உதவ முடியும்?",
        "ஹே! 💜 உங்களைப் பார்த்து மகிழ்ச்சி. உங்கள் நாள் எப்படி போகிறது?",
    ],
    generator_failed: "நீங்கள் எதைச் செய்தாலும் நான் உங்களுடன் இருக்கிறேன்। 💜",
    generator_offline: "நான் உங்களை ஆதரிக்க இங்கே இருக்கிறேன்। 💜",
    empty_input: "வணக்கம்! நான் Sakha.ai, உங்கள் இரக்கமுள்ள துணை. இன்று நீங்கள் எப்படி உணருகிறீர்கள்?",
    technical_difficulty: "நான் சில தொழில்நுட்ப சிக்கல்களை அனுபவிக்கிறேன், ஆனால் நான் இன்னும் உங்களுடன் இருக்கிறேன். தயவுசெய்து மீண்டும் முயற்சிக்கவும்.",
    prompt: "நீங்கள் Sakha.ai, ஒரு இரக்கமுள்ள மன ஆரோக்கிய மற்றும் நல்வாழ்வு துணை.
இதற்கு பதிலளிக்கவும்: \"{message}\"

வழிகாட்டுதல்கள்:
- வெப்பமாக, ஆதரவாக மற்றும் பச்சாதாபமாக இருங்கள்
- பேச்சுவழக்கு மற்றும் பயனுள்ள பதில்களை வைத்திருங்கள்
- மன ஆரோக்கிய ஆதரவு மற்றும் நல்வாழ்வில் கவனம் செலுத்துங்கள்
- ஊக்கமளிக்கவும் ஆனால் போதனை செய்யாதீர்கள்
- எமோஜிகளை மிதமாக பயன்படுத்துங்கள்",
};

static TE: LocaleStrings = LocaleStrings {
    crisis: "🚨 నేను మీ గురించి ఆందోళన చెందుతున్నాను. దయచేసి వెంటనే సంప్రదించండి:\n• ఆస్రా: +91-22-27546669\n• స్నేహ: +91-44-24640050\n• అత్యవసరం: 112\n\nమీరు ఒంటరిగా లేరు. సహాయం అందుబాటులో ఉంది.",
    greetings: [
        "హలో! నేను Sakha.ai 😊 మీరు ఈరోజు ఎలా ఉన్నారు?",
        "హలో! 👋 నేను మిమ్మల్ని మద్దతు ఇవ్వడానికి ఇక్కడ ఉన్నాను. మీ మనసులో ఏమి ఉంది?",
        "నమస్కారం! 🙏 నేను మీ క్షేమ సహచరుడిని. నేను ఎలా సహాయపడగలను?",
        "హే! 💜 మిమ్మల్ని చూసి సంతోషం. మీ రోజు ఎలా గడుస్తోంది?",
    ],
    generator_failed: "మీరు ఏమి చేస్తున్నా నేను మీతో ఉన్నాను। 💜",
    generator_offline: "నేను మిమ్మల్ని మద్దతు ఇవ్వడానికి ఇక్కడ ఉన్నాను। 💜",
    empty_input: "హలో! నేను Sakha.ai, మీ దయగల సహచరుడిని. మీరు ఈరోజు ఎలా ఉన్నారు?",
    technical_difficulty: "నేను కొన్ని సాంకేతిక ఇబ్బందులను అనుభవిస్తున్నాను, కానీ నేను ఇంకా మీతో ఉన్నాను. దయచేసి మళ్లీ ప్రయత్నించండి.",
    prompt: "మీరు Sakha.ai, ఒక దయగల మానసిక ఆరోగ్య మరియు క్షేమ సహచరుడు.
దీనికి సమాధానం ఇవ్వండి: \"{message}\"

మార్గదర్శకాలు:
- వెచ్చదనంతో, మద్దతుతో మరియు సానుభూతితో ఉండండి
- సంభాషణ మరియు ఉపయోగకరమైన సమాధానాలను ఉంచండి
- మానసిక ఆరోగ్య మద్దతు మరియు క్షేమంపై దృష్టి పెట్టండి
- ప్రోత్సాహించండి కానీ ఉపదేశం చేయకండి
- ఇమోజీలను మితంగా ఉపయోగించండి",
};

static PA: LocaleStrings = LocaleStrings {
    crisis: "🚨 ਮੈਂ ਤੁਹਾਡੇ ਬਾਰੇ ਚਿੰਤਤ ਹਾਂ। ਕਿਰਪਾ ਕਰਕੇ ਤੁਰੰਤ ਸੰਪਰਕ ਕਰੋ:\n• ਆਸਰਾ: +91-22-27546669\n• ਸਨੇਹਾ: +91-44-24640050\n• ਐਮਰਜੈਂਸੀ: 112\n\nਤੁਸੀਂ ਇਕੱਲੇ ਨਹੀਂ ਹੋ। ਮਦਦ ਉਪਲਬਧ ਹੈ।",
    greetings: [
        "ਸਤ ਸ੍ਰੀ ਅਕਾਲ! ਮੈਂ Sakha.ai ਹਾਂ 😊 ਅੱਜ ਤੁਸੀਂ ਕਿਵੇਂ ਮਹਿਸੂਸ ਕਰ ਰਹੇ ਹੋ?",
        "ਹੈਲੋ! 👋 ਮੈਂ ਤੁਹਾਡਾ ਸਮਰਥਨ ਕਰਨ ਲਈ ਇੱਥੇ ਹਾਂ। ਤੁਹਾਡੇ ਮਨ ਵਿੱਚ ਕੀ ਹੈ?",
        "ਨਮਸਕਾਰ! 🙏 ਮੈਂ ਤੁਹਾਡਾ ਤੰਦਰੁਸਤੀ ਸਾਥੀ ਹਾਂ। ਮੈਂ ਕਿਵੇਂ ਮਦਦ ਕਰ ਸਕਦਾ ਹਾਂ?",
        "ਹੇ! 💜 ਤੁਹਾਨੂੰ ਵੇਖ ਕੇ ਖੁਸ਼ੀ ਹੋਈ। ਤੁਹਾਡਾ ਦਿਨ ਕਿਵੇਂ ਗੁਜਰ ਰਿਹਾ ਹੈ?",
    ],
    generator_failed: "ਤੁਸੀਂ ਜੋ ਵੀ ਕਰ ਰਹੇ ਹੋ, ਮੈਂ ਤੁਹਾਡੇ ਨਾਲ ਹਾਂ। 💜",
    generator_offline: "ਮੈਂ ਤੁਹਾਡਾ ਸਮਰਥਨ ਕਰਨ ਲਈ ਇੱਥੇ ਹਾਂ। 💜",
    empty_input: "ਸਤ ਸ੍ਰੀ ਅਕਾਲ! ਮੈਂ Sakha.ai ਹਾਂ, ਤੁਹਾਡਾ ਦਿਆਲੂ ਸਾਥੀ। ਅੱਜ ਤੁਸੀਂ ਕਿਵੇਂ ਮਹਿਸੂਸ ਕਰ ਰਹੇ ਹੋ?",
    technical_difficulty: "ਮੈਂ ਕੁਝ ਤਕਨੀਕੀ ਮੁਸ਼ਕਲਾਂ ਦਾ ਸਾਹਮਣਾ ਕਰ ਰਿਹਾ ਹਾਂ, ਪਰ ਮੈਂ ਅਜੇ ਵੀ ਤੁਹਾਡੇ ਨਾਲ ਹਾਂ। ਕਿਰਪਾ ਕਰਕੇ ਦੁਬਾਰਾ ਕੋਸ਼ਿਸ਼ ਕਰੋ।",
    prompt: "ਤੁਸੀਂ Sakha.ai ਹੋ, ਇੱਕ ਦਿਆਲੂ ਮਾਨਸਿਕ ਸਿਹਤ ਅਤੇ ਤੰਦਰੁਸਤੀ ਸਾਥੀ।
ਇਸਦਾ ਜਵਾਬ ਦਿਓ: \"{message}\"

ਦਿਸ਼ਾਨਿਰਦੇਸ਼:
- ਗਰਮ, ਸਹਾਇਕ ਅਤੇ ਹਮਦਰਦੀ ਭਰਪੂਰ ਰਹੋ
- ਗੱਲਬਾਤ ਅਤੇ ਮਦਦਗਾਰ ਜਵਾਬ ਰੱਖੋ
- ਮਾਨਸਿਕ ਸਿਹਤ ਸਹਾਇਤਾ ਅਤੇ ਤੰਦਰੁਸਤੀ 'ਤੇ ਧਿਆਨ ਦਿਓ
- ਉਤਸ਼ਾਹਿਤ ਕਰੋ ਪਰ ਉਪਦੇਸ਼ ਨਾ ਦਿਓ
- ਇਮੋਜੀ ਦਾ ਮਿਤ ਵਰਤੋਂ ਕਰੋ",
};

static FR: LocaleStrings = LocaleStrings {
    crisis: "🚨 Je m'inquiète pour vous. Veuillez contacter immédiatement:\n• AASRA: +91-22-27546669\n• Sneha: +91-44-24640050\n• Urgence: 112\n\nVous n'êtes pas seul. L'aide est disponible.",
    greetings: [
        "Bonjour! Je suis Sakha.ai 😊 Comment vous sentez-vous aujourd'hui?",
        "Salut! 👋 Je suis là pour vous soutenir. Qu'est-ce qui vous préoccupe?",
        "Namaste! 🙏 Je suis votre compagnon de bien-être. Comment puis-je vous aider?",
        "Hey! 💜 Ravi de vous voir. Comment se passe votre journée?",
    ],
    generator_failed: "Je suis là pour vous soutenir dans tout ce que vous traversez. 💜",
    generator_offline: "Je suis là pour vous soutenir. 💜",
    empty_input: "Salut! Je suis Sakha.ai, votre compagnon compatissant. Comment vous sentez-vous aujourd'hui?",
    technical_difficulty: "J'éprouve quelques difficultés techniques, mais je suis toujours là pour vous. Veuillez réessayer.",
    prompt: "Vous êtes Sakha.ai, un compagnon compatissant en santé mentale et bien-être.
Répondez à: \"{message}\"

Directives:
- Soyez chaleureux, solidaire et empathique
- Gardez les réponses conversationnelles et utiles
- Concentrez-vous sur le soutien en santé mentale et le bien-être
- Soyez encourageant mais pas moralisateur
- Utilisez les emojis avec parcimonie",
};

static ES: LocaleStrings = LocaleStrings {
    crisis: "🚨 Me preocupo por ti. Por favor contacta inmediatamente:\n• AASRA: +91-22-27546669\n• Sneha: +91-44-24640050\n• Emergencia: 112\n\nNo estás solo. La ayuda está disponible.",
    greetings: [
        "¡Hola! Soy Sakha.ai 😊 ¿Cómo te sientes hoy?",
        "¡Hola! 👋 Estoy aquí para apoyarte. ¿Qué tienes en mente?",
        "¡Namaste! 🙏 Soy tu compañero de bienestar. ¿Cómo puedo ayudarte?",
        "¡Hey! 💜 Me alegra verte. ¿Cómo va tu día?",
    ],
    generator_failed: "Estoy aquí para apoyarte en lo que estés pasando. 💜",
    generator_offline: "Estoy aquí para apoyarte. 💜",
    empty_input: "¡Hola! Soy Sakha.ai, tu compañero compasivo. ¿Cómo te sientes hoy?",
    technical_difficulty: "Estoy experimentando algunas dificultades técnicas, pero sigo aquí para ti. Por favor intenta de nuevo.",
    prompt: "Eres Sakha.ai, un compañero compasivo de salud mental y bienestar.
Responde a: \"{message}\"

Pautas:
- Sé cálido, solidario y empático
- Mantén las respuestas conversacionales y útiles
- Enfócate en el apoyo de salud mental y bienestar
- Sé alentador pero no sermoneador
- Usa emojis con moderación",
};
