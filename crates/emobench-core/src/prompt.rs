//! Instruction prompts for single-word emotion classification. Each
//! supported language carries its own hand-written emotion vocabulary and
//! phrasing; country-keyed runs use a generic English template that states
//! the respondent's country of residence.

use crate::config::{Mode, PromptStyle};
use crate::errors::EvalError;
use std::fmt;
use std::str::FromStr;

/// Languages with a dedicated prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Arabic,
    Spanish,
    Amharic,
    German,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Arabic,
        Language::Spanish,
        Language::Amharic,
        Language::German,
        Language::Hindi,
    ];

    /// Name used in CLI flags and in the `language` field of result records.
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "Arabic",
            Language::Spanish => "Spanish",
            Language::Amharic => "Amharic",
            Language::German => "German",
            Language::Hindi => "Hindi",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                EvalError::Config(format!(
                    "unknown language '{s}' (expected one of: English, Arabic, Spanish, Amharic, German, Hindi)"
                ))
            })
    }
}

/// Builds the full instruction string for one text sample.
///
/// The text is embedded verbatim; the model is asked to answer with exactly
/// one word from the template's emotion vocabulary. Fails when the resolved
/// mode cannot be phrased: a plain-style country run has no template.
pub fn build_prompt(mode: &Mode, style: PromptStyle, text: &str) -> Result<String, EvalError> {
    match (mode, style) {
        (Mode::Language(lang), PromptStyle::Situated) => Ok(situated(*lang, text)),
        (Mode::Language(lang), PromptStyle::Plain) => Ok(plain(*lang, text)),
        (Mode::Country(country), PromptStyle::Situated) => {
            if country.is_empty() {
                return Err(EvalError::Config(
                    "either a language or a country is required".into(),
                ));
            }
            Ok(format!(
                "You live in {country}, choose the best emotion you feel for the given question. Emotions can be only either 'anger', 'fear', 'sadness', 'joy', 'guilt', or 'neutral'. Return only a single emotion word from the list of emotions without further explanation. \nText: {text}"
            ))
        }
        (Mode::Country(_), PromptStyle::Plain) => Err(EvalError::Config(
            "plain prompt style requires a language, not a country".into(),
        )),
    }
}

/// Localized template with the residence preamble.
fn situated(lang: Language, text: &str) -> String {
    match lang {
        Language::English => format!(
            "You live in the United States of America, choose the best emotion you feel for the given question. Emotions can only be 'anger', 'fear', 'sadness', 'joy', 'guilt', or 'neutral'. Return only a single emotion word from the list of emotions without further explanation. \nText: {text}\nAnswer:"
        ),
        Language::Arabic => format!(
            "أنت تعيش في دولة الإمارات العربية المتحدة، اختر الحالة العاطفية الأفضل التي تشعر بها تجاه السؤال المطروح. يمكن أن تكون العواطف إما \"غضب\" أو \"خوف\" أو \"حزن\" أو \"فرح\" أو \"ذنب\" أو \"محايد\". أعد فقط كلمة عاطفة واحدة من قائمة العواطف دون أي تفسير إضافي.\n النص: {text}\n الإجابة:"
        ),
        Language::Spanish => format!(
            "Vives en México. Elige la emoción que sientes más a menudo en la pregunta. Las emociones pueden ser 'enojo','tristeza','culpa','alegría','miedo' o 'neutral'. Solo responde con una palabra de la lista de emociones sin más explicaciones. \nTexto: {text}\nRespuesta:"
        ),
        Language::Amharic => format!(
            "የምትኖረው ኢትዮጵያ ውስጥ ነው፣ ለተሰጠው ጥያቄ የሚሰማህን ስሜት ምረጥ። ስሜቶች 'ቁጣ', 'ጥፋተኛ', 'ሀዘን', 'ደስታ', 'ፍርሀት' ወይም 'መደበኛ' ብቻ ሊሆኑ ይችላሉ:: ያለተጨማሪ ማብራሪያ ከስሜቶች ዝርዝር ውስጥ አንዱን ስሜት ብቻ ይመልሱ።\n\"ጽሑፍ፡ {text}\nመልስ፡"
        ),
        Language::German => format!(
            "Sie leben in Deutschland. Wählen Sie die beste Emotion, die Sie für die gestellte Frage empfinden. Emotionen können nur 'wut', 'freude', 'traurigkeit', 'schuld', 'furcht' oder 'neutral' sein. Geben Sie nur ein einziges Emotionswort aus der Liste der Emotionen ohne weitere Erklärung zurück. \nText: {text}\nAntwort:"
        ),
        Language::Hindi => format!(
            "आप भारत में रहते हैं, दिए गए प्रश्न के लिए अपनी सबसे अच्छी भावना चुनें। भावनाएँ केवल 'उदासी', 'आनंद', 'अपराध', 'गुस्सा', 'डर', या 'सामान्य' हो सकती हैं। बिना किसी अतिरिक्त स्पष्टीकरण के भावनाओं की सूची से केवल एक ही भावना शब्द लौटाएँ। \nपाठ: {text}\nउत्तर:"
        ),
    }
}

/// Localized template without the residence preamble.
fn plain(lang: Language, text: &str) -> String {
    match lang {
        Language::English => format!(
            "Choose the best emotion you feel for the given question. Emotions can be only either 'anger', 'fear', 'sadness', 'joy', 'guilt', or 'neutral'. Return only a single emotion word from the list of emotions without further explanation. \nText: {text}\nAnswer:"
        ),
        Language::Arabic => format!(
            "اختر الحالة العاطفية الأفضل التي تشعر بها تجاه السؤال المطروح. يمكن أن تكون العواطف إما \"غضب\" أو \"خوف\" أو \"حزن\" أو \"فرح\" أو \"ذنب\" أو \"محايد\". أعد فقط كلمة عاطفة واحدة من قائمة العواطف دون أي تفسير إضافي.\n النص: {text}\n الإجابة:"
        ),
        Language::Spanish => format!(
            "Elige la emoción que sientes más a menudo en la pregunta. Las emociones pueden ser 'enojo','tristeza','culpa','alegría','miedo' o 'neutral'. Solo responde con una palabra de la lista de emociones sin más explicaciones. \nTexto: {text}\nRespuesta:"
        ),
        Language::Amharic => format!(
            "ለተሰጠው ጥያቄ የሚሰማህን ስሜት ምረጥ። ስሜቶች 'ቁጣ', 'ጥፋተኛ', 'ሀዘን', 'ደስታ', 'ፍርሀት' ወይም 'መደበኛ' ብቻ ሊሆኑ ይችላሉ:: ያለተጨማሪ ማብራሪያ ከስሜቶች ዝርዝር ውስጥ አንዱን ስሜት ብቻ ይመልሱ።\n\"ጽሑፍ፡ {text}\nመልስ፡"
        ),
        Language::German => format!(
            "Wählen Sie die beste Emotion, die Sie für die gestellte Frage empfinden. Emotionen können nur 'wut', 'freude', 'traurigkeit', 'schuld', 'furcht' oder 'neutral' sein. Geben Sie nur ein einziges Emotionswort aus der Liste der Emotionen ohne weitere Erklärung zurück. \nText: {text}\nAntwort:"
        ),
        Language::Hindi => format!(
            "दिए गए प्रश्न के लिए अपनी सबसे अच्छी भावना चुनें। भावनाएँ केवल 'उदासी', 'आनंद', 'अपराध', 'गुस्सा', 'डर', या 'सामान्य' हो सकती हैं। बिना किसी अतिरिक्त स्पष्टीकरण के भावनाओं की सूची से केवल एक ही भावना शब्द लौटाएँ। \nपाठ: {text}\nउत्तर:"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The complete quoted emotion enumeration of each language's template.
    fn vocabulary(lang: Language) -> &'static str {
        match lang {
            Language::English => "'anger', 'fear', 'sadness', 'joy', 'guilt', or 'neutral'",
            Language::Arabic => {
                "\"غضب\" أو \"خوف\" أو \"حزن\" أو \"فرح\" أو \"ذنب\" أو \"محايد\""
            }
            Language::Spanish => "'enojo','tristeza','culpa','alegría','miedo' o 'neutral'",
            Language::Amharic => "'ቁጣ', 'ጥፋተኛ', 'ሀዘን', 'ደስታ', 'ፍርሀት' ወይም 'መደበኛ'",
            Language::German => {
                "'wut', 'freude', 'traurigkeit', 'schuld', 'furcht' oder 'neutral'"
            }
            Language::Hindi => "'उदासी', 'आनंद', 'अपराध', 'गुस्सा', 'डर', या 'सामान्य'",
        }
    }

    #[test]
    fn every_language_embeds_text_and_vocabulary_once() {
        let text = "sample-input-98765";
        for lang in Language::ALL {
            for style in [PromptStyle::Situated, PromptStyle::Plain] {
                let prompt = build_prompt(&Mode::Language(lang), style, text).unwrap();
                assert!(prompt.contains(text), "{lang}: text not embedded");
                assert_eq!(
                    prompt.matches(vocabulary(lang)).count(),
                    1,
                    "{lang}: emotion list must appear exactly once"
                );
            }
        }
    }

    #[test]
    fn country_prompt_states_residence_and_embeds_text() {
        let prompt = build_prompt(
            &Mode::Country("Ethiopia".into()),
            PromptStyle::Situated,
            "how was your day",
        )
        .unwrap();
        assert!(prompt.starts_with("You live in Ethiopia,"));
        assert!(prompt.contains("how was your day"));
        assert_eq!(prompt.matches(vocabulary(Language::English)).count(), 1);
    }

    #[test]
    fn plain_style_rejects_country_mode() {
        let err =
            build_prompt(&Mode::Country("Mexico".into()), PromptStyle::Plain, "hi").unwrap_err();
        assert!(err.to_string().contains("config error"), "{err}");
    }

    #[test]
    fn plain_style_drops_residence_preamble() {
        for lang in Language::ALL {
            let prompt = build_prompt(&Mode::Language(lang), PromptStyle::Plain, "t").unwrap();
            assert!(
                !prompt.contains("You live in"),
                "{lang}: plain prompt must not state residence"
            );
        }
        let situated = build_prompt(
            &Mode::Language(Language::English),
            PromptStyle::Situated,
            "t",
        )
        .unwrap();
        assert!(situated.starts_with("You live in the United States of America"));
    }

    #[test]
    fn language_parses_case_insensitively() {
        assert_eq!("spanish".parse::<Language>().unwrap(), Language::Spanish);
        assert_eq!("German".parse::<Language>().unwrap(), Language::German);
        assert!("Klingon".parse::<Language>().is_err());
    }
}
