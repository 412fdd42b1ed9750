//! Display languages and their translation bundles.
//!
//! Every [`LanguageCode`] maps to a complete [`Translations`] constant, so a
//! missing string is a compile error rather than a runtime fallback.

use serde::{Deserialize, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    Pt,
    En,
    De,
    Zh,
}

impl LanguageCode {
    /// All languages in selector order
    pub fn all() -> &'static [LanguageCode] {
        &[
            LanguageCode::Pt,
            LanguageCode::En,
            LanguageCode::De,
            LanguageCode::Zh,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::Pt => "pt",
            LanguageCode::En => "en",
            LanguageCode::De => "de",
            LanguageCode::Zh => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pt" => Some(LanguageCode::Pt),
            "en" => Some(LanguageCode::En),
            "de" => Some(LanguageCode::De),
            "zh" => Some(LanguageCode::Zh),
            _ => None,
        }
    }

    /// Selector button label (flag and upper-case code)
    pub fn label(&self) -> &'static str {
        match self {
            LanguageCode::Pt => "🇧🇷 PT",
            LanguageCode::En => "🇺🇸 EN",
            LanguageCode::De => "🇩🇪 DE",
            LanguageCode::Zh => "🇨🇳 ZH",
        }
    }

    /// Value for the `lang` attribute of the page
    pub fn html_lang(&self) -> &'static str {
        match self {
            LanguageCode::Pt => "pt-BR",
            LanguageCode::En => "en",
            LanguageCode::De => "de",
            LanguageCode::Zh => "zh-CN",
        }
    }

    pub fn translations(&self) -> &'static Translations {
        match self {
            LanguageCode::Pt => &PT,
            LanguageCode::En => &EN,
            LanguageCode::De => &DE,
            LanguageCode::Zh => &ZH,
        }
    }
}

/// Display strings used by the contact page
#[derive(Debug, PartialEq, Eq)]
pub struct Translations {
    pub contact_title: &'static str,
    pub contact_subtitle: &'static str,
    pub full_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub message: &'static str,
    pub name_placeholder: &'static str,
    pub email_placeholder: &'static str,
    pub phone_placeholder: &'static str,
    pub message_question: &'static str,
    pub not_robot: &'static str,
    pub send_button: &'static str,
    pub sending: &'static str,
    pub success_message: &'static str,
    pub error_message: &'static str,
    pub connection_error: &'static str,
    pub captcha_alert: &'static str,
    pub whatsapp_button: &'static str,
    pub complete_operator: &'static str,
}

impl Translations {
    /// All strings of the bundle, used to check completeness
    pub fn entries(&self) -> [(&'static str, &'static str); 19] {
        [
            ("contact_title", self.contact_title),
            ("contact_subtitle", self.contact_subtitle),
            ("full_name", self.full_name),
            ("email", self.email),
            ("phone", self.phone),
            ("message", self.message),
            ("name_placeholder", self.name_placeholder),
            ("email_placeholder", self.email_placeholder),
            ("phone_placeholder", self.phone_placeholder),
            ("message_question", self.message_question),
            ("not_robot", self.not_robot),
            ("send_button", self.send_button),
            ("sending", self.sending),
            ("success_message", self.success_message),
            ("error_message", self.error_message),
            ("connection_error", self.connection_error),
            ("captcha_alert", self.captcha_alert),
            ("whatsapp_button", self.whatsapp_button),
            ("complete_operator", self.complete_operator),
        ]
    }
}

pub const PT: Translations = Translations {
    contact_title: "Fale Conosco",
    contact_subtitle: "Preencha o formulário e nossa equipe entrará em contato em breve.",
    full_name: "Nome completo",
    email: "E-mail",
    phone: "Telefone",
    message: "Mensagem",
    name_placeholder: "Seu nome completo",
    email_placeholder: "seu@email.com",
    phone_placeholder: "+55 (11) 99999-9999",
    message_question: "Como podemos ajudar?",
    not_robot: "Não sou um robô",
    send_button: "Enviar mensagem",
    sending: "Enviando...",
    success_message: "Mensagem enviada com sucesso! Entraremos em contato em breve.",
    error_message: "Erro ao enviar a mensagem. Tente novamente.",
    connection_error: "Erro de conexão. Verifique sua internet e tente novamente.",
    captcha_alert: "Por favor, confirme que você não é um robô.",
    whatsapp_button: "Fale conosco pelo WhatsApp",
    complete_operator: "Um dos operadores logísticos mais completos do país",
};

pub const EN: Translations = Translations {
    contact_title: "Contact Us",
    contact_subtitle: "Fill out the form and our team will get back to you shortly.",
    full_name: "Full name",
    email: "Email",
    phone: "Phone",
    message: "Message",
    name_placeholder: "Your full name",
    email_placeholder: "you@email.com",
    phone_placeholder: "+1 (55) 99999-9999",
    message_question: "How can we help?",
    not_robot: "I'm not a robot",
    send_button: "Send message",
    sending: "Sending...",
    success_message: "Message sent successfully! We will contact you soon.",
    error_message: "Failed to send the message. Please try again.",
    connection_error: "Connection error. Check your internet and try again.",
    captcha_alert: "Please confirm that you are not a robot.",
    whatsapp_button: "Talk to us on WhatsApp",
    complete_operator: "One of the country's most complete logistics operators",
};

pub const DE: Translations = Translations {
    contact_title: "Kontakt",
    contact_subtitle: "Füllen Sie das Formular aus und unser Team meldet sich in Kürze.",
    full_name: "Vollständiger Name",
    email: "E-Mail",
    phone: "Telefon",
    message: "Nachricht",
    name_placeholder: "Ihr vollständiger Name",
    email_placeholder: "ihre@email.de",
    phone_placeholder: "+49 (30) 99999-9999",
    message_question: "Wie können wir helfen?",
    not_robot: "Ich bin kein Roboter",
    send_button: "Nachricht senden",
    sending: "Wird gesendet...",
    success_message: "Nachricht erfolgreich gesendet! Wir melden uns bald.",
    error_message: "Fehler beim Senden der Nachricht. Bitte erneut versuchen.",
    connection_error: "Verbindungsfehler. Prüfen Sie Ihre Internetverbindung und versuchen Sie es erneut.",
    captcha_alert: "Bitte bestätigen Sie, dass Sie kein Roboter sind.",
    whatsapp_button: "Schreiben Sie uns auf WhatsApp",
    complete_operator: "Einer der umfassendsten Logistikdienstleister des Landes",
};

pub const ZH: Translations = Translations {
    contact_title: "联系我们",
    contact_subtitle: "请填写表单，我们的团队会尽快与您联系。",
    full_name: "姓名",
    email: "电子邮件",
    phone: "电话",
    message: "留言",
    name_placeholder: "您的姓名",
    email_placeholder: "you@email.com",
    phone_placeholder: "+86 (10) 99999-9999",
    message_question: "我们能为您做些什么？",
    not_robot: "我不是机器人",
    send_button: "发送消息",
    sending: "发送中...",
    success_message: "消息发送成功！我们会尽快与您联系。",
    error_message: "消息发送失败，请重试。",
    connection_error: "连接错误，请检查网络后重试。",
    captcha_alert: "请确认您不是机器人。",
    whatsapp_button: "通过 WhatsApp 联系我们",
    complete_operator: "巴西最全面的物流运营商之一",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_portuguese() {
        assert_eq!(LanguageCode::default(), LanguageCode::Pt);
    }

    #[test]
    fn test_code_round_trip() {
        for lang in LanguageCode::all() {
            assert_eq!(LanguageCode::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(LanguageCode::from_code("fr"), None);
        assert_eq!(LanguageCode::from_code("PT"), None);
    }

    #[test]
    fn test_every_bundle_is_complete() {
        for lang in LanguageCode::all() {
            for (key, value) in lang.translations().entries() {
                assert!(
                    !value.trim().is_empty(),
                    "{} bundle has empty {}",
                    lang.code(),
                    key
                );
            }
        }
    }

    #[test]
    fn test_bundles_are_distinct() {
        let all = LanguageCode::all();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(
                    a.translations().success_message,
                    b.translations().success_message
                );
            }
        }
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&LanguageCode::Zh).unwrap(), "\"zh\"");
        let lang: LanguageCode = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, LanguageCode::De);
    }
}
