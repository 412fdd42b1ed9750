//! Branding column of the landing page: logo, institutional video, WhatsApp
//! call-to-action and social links.

use leptos::prelude::*;

use crate::ui::i18n::use_i18n_context;
use crate::ui::icon::{Icon, icons};

pub const LOGO_SRC: &str = "/logo-brc.png";
pub const VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/O1oERqD6k68";
pub const WHATSAPP_URL: &str = "https://wa.me/5511968500353";

/// Outbound social network link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        name: "Instagram",
        href: "https://instagram.com",
        icon: "/icons/instagram.png",
    },
    SocialLink {
        name: "Facebook",
        href: "https://facebook.com",
        icon: "/icons/facebook.png",
    },
    SocialLink {
        name: "LinkedIn",
        href: "https://linkedin.com",
        icon: "/icons/linkedin.png",
    },
];

#[component]
pub fn BrandPanel() -> impl IntoView {
    let i18n = use_i18n_context();

    view! {
        <div class="flex flex-col space-y-6 sm:space-y-8">
            <div class="bg-white rounded-2xl shadow-lg p-6 sm:p-8 flex items-center justify-center">
                <img
                    src=LOGO_SRC
                    alt="BRCLOG Logo"
                    width="280"
                    height="120"
                    class="max-w-full h-auto object-contain"
                />
            </div>

            <div class="bg-white rounded-2xl shadow-lg p-4 sm:p-6">
                <div class="aspect-video rounded-lg overflow-hidden bg-gray-900">
                    <iframe
                        width="100%"
                        height="100%"
                        src=VIDEO_EMBED_URL
                        title="YouTube video player"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                        class="w-full h-full border-0"
                    ></iframe>
                </div>
            </div>

            <a
                href=WHATSAPP_URL
                target="_blank"
                rel="noopener noreferrer"
                class="bg-gradient-to-r from-green-500 to-green-600 hover:from-green-600 hover:to-green-700 text-white font-semibold
                       py-3 sm:py-4 px-6 sm:px-8 rounded-2xl shadow-lg transition-all duration-300 transform hover:scale-105
                       flex items-center justify-center gap-2 sm:gap-3 group text-base sm:text-lg"
            >
                <Icon name=icons::WHATSAPP class="w-5 h-5 sm:w-6 sm:h-6 transition-transform group-hover:rotate-12" />
                <span>{move || i18n.t().whatsapp_button}</span>
            </a>

            <div class="flex items-center justify-center gap-4 mt-4">
                {SOCIAL_LINKS
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.name>
                                <img
                                    src=link.icon
                                    alt=link.name
                                    width="32"
                                    height="32"
                                    class="hover:opacity-80 transition"
                                />
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_social_links_are_https() {
        for link in SOCIAL_LINKS {
            assert!(link.href.starts_with("https://"), "{}", link.name);
            assert!(link.icon.starts_with("/icons/"), "{}", link.name);
        }
    }

    #[test]
    fn test_whatsapp_link_has_full_number() {
        let number = WHATSAPP_URL.trim_start_matches("https://wa.me/");
        assert!(number.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(number.len(), 13);
    }

    #[test]
    fn test_video_embed_url_is_https_youtube_embed() {
        let id = VIDEO_EMBED_URL.trim_start_matches("https://www.youtube.com/embed/");
        assert_ne!(id, VIDEO_EMBED_URL);
        assert!(!id.is_empty());
        assert!(!id.contains('/'));
    }
}
