//! Deterministic local content served when an upstream service can't be used.

use crate::models::{Platform, Tone};
use uuid::Uuid;

const TOPIC: &str = "{topic}";
const HASHTAG: &str = "{hashtag}";

const INSTAGRAM_INSPIRATIONAL: &str = "🌟 Amazing content about {topic}! ✨\n\n\
This is exactly what you need to see today! 💫\n\n\
Don't forget to like and share if this inspired you! ❤️\n\n\
#{hashtag} #Inspiration #Motivation #Trending #Viral";

/// (platform, tone, template). Pairs not listed use `INSTAGRAM_INSPIRATIONAL`.
const CAPTION_TEMPLATES: &[(&str, &str, &str)] = &[
    ("instagram", "inspirational", INSTAGRAM_INSPIRATIONAL),
    (
        "instagram",
        "casual",
        "Just vibing with {topic} today ☕😎\n\n\
         Who else is into this? Drop a 🙌 in the comments!\n\n\
         #{hashtag} #GoodVibes #DailyLife #InstaDaily #Mood",
    ),
    (
        "instagram",
        "professional",
        "Spotlight on {topic} 📌\n\n\
         A closer look at what makes it matter and why it deserves your attention. 💡\n\n\
         Save this post and share it with someone who needs it! 🔖\n\n\
         #{hashtag} #Insights #Growth #Quality #Expert",
    ),
    (
        "facebook",
        "inspirational",
        "🚀 Exciting update about {topic}!\n\n\
         We're thrilled to share this with our community. What are your thoughts? Share in the comments below! 👇\n\n\
         Like and follow for more amazing content! 👍\n\n\
         #{hashtag} #Update #News #Community",
    ),
    (
        "facebook",
        "professional",
        "Today we're taking a closer look at {topic}.\n\n\
         Understanding it better helps all of us make smarter decisions. What has your experience been? 💬\n\n\
         #{hashtag} #Community #Insights",
    ),
    (
        "facebook",
        "casual",
        "Okay, let's talk about {topic} 😄\n\n\
         Are you a fan or not so much? Tell us in the comments! 👇\n\n\
         #{hashtag} #LetsTalk #Community",
    ),
    (
        "twitter",
        "casual",
        "Quick insight about {topic}! 💡\n\n\
         This changes everything! 🎯\n\n\
         Retweet if you find this helpful! 🔁\n\n\
         #{hashtag} #Tips",
    ),
    (
        "twitter",
        "professional",
        "Key takeaway on {topic}: small changes compound into big results. 📈\n\n\
         Reply with your view. 🔁\n\n\
         #{hashtag} #Insights",
    ),
    (
        "linkedin",
        "professional",
        "Professional perspective on {topic}. 🎯\n\n\
         Key takeaways that can transform your approach. How has this impacted your work? Let's discuss in the comments! 💼\n\n\
         Like and repost to share with your network! 🔄\n\n\
         #{hashtag} #Professional #Career #Business",
    ),
    (
        "linkedin",
        "inspirational",
        "What {topic} taught me about growth. 🌱\n\n\
         Every challenge is an opportunity to learn something new. What lesson has shaped your career? Share below. 💬\n\n\
         #{hashtag} #Leadership #Growth #Career #Inspiration",
    ),
];

const INSTAGRAM_IMAGE: &str =
    "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?w=1024&h=1024&fit=crop";
const FACEBOOK_IMAGE: &str =
    "https://images.unsplash.com/photo-1611162616305-c69b3fa7fbe0?w=1024&h=1024&fit=crop";
const TWITTER_IMAGE: &str =
    "https://images.unsplash.com/photo-1611605698335-8b1569810432?w=1024&h=1024&fit=crop";
const LINKEDIN_IMAGE: &str =
    "https://images.unsplash.com/photo-1611944212129-29977ae1398c?w=1024&h=1024&fit=crop";
const PLACEHOLDER_IMAGE_BASE: &str = "https://picsum.photos/1024/1024?random=";

pub fn fallback_image(platform: &Platform) -> String {
    match platform {
        Platform::Instagram => INSTAGRAM_IMAGE.to_string(),
        Platform::Facebook => FACEBOOK_IMAGE.to_string(),
        Platform::Twitter => TWITTER_IMAGE.to_string(),
        Platform::Linkedin => LINKEDIN_IMAGE.to_string(),
        Platform::Custom(_) => format!("{}{}", PLACEHOLDER_IMAGE_BASE, Uuid::new_v4().simple()),
    }
}

pub fn topic_hashtag(topic: &str) -> String {
    topic.split_whitespace().collect()
}

fn caption_template(platform: &Platform, tone: &Tone) -> &'static str {
    CAPTION_TEMPLATES
        .iter()
        .find(|(p, t, _)| *p == platform.as_str() && *t == tone.as_str())
        .map(|(_, _, template)| *template)
        .unwrap_or(INSTAGRAM_INSPIRATIONAL)
}

pub fn fallback_caption(topic: &str, platform: &Platform, tone: &Tone) -> String {
    caption_template(platform, tone)
        .replace(HASHTAG, &topic_hashtag(topic))
        .replace(TOPIC, topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_placeholder_image(url: &str) -> bool {
        url.starts_with(PLACEHOLDER_IMAGE_BASE)
    }

    #[test]
    fn test_known_platforms_have_stable_images() {
        for platform in Platform::known() {
            let first = fallback_image(&platform);
            assert_eq!(first, fallback_image(&platform));
            assert!(!is_placeholder_image(&first));
        }
    }

    #[test]
    fn test_unknown_platform_gets_placeholder() {
        let platform = Platform::Custom("tiktok".to_string());
        let first = fallback_image(&platform);
        assert!(is_placeholder_image(&first));
        assert_ne!(first, fallback_image(&platform));
    }

    #[test]
    fn test_every_template_has_topic_and_hashtag() {
        let topic = "morning coffee";
        for (platform, tone, _) in CAPTION_TEMPLATES {
            let caption = fallback_caption(
                topic,
                &Platform::parse(Some(*platform)),
                &Tone::parse(Some(*tone)),
            );
            assert!(caption.contains(topic), "{}/{}", platform, tone);
            assert!(caption.contains("#morningcoffee"), "{}/{}", platform, tone);
            assert!(!caption.contains('{'));
        }
    }

    #[test]
    fn test_missing_pair_uses_default_template() {
        let expected = fallback_caption("tea", &Platform::Instagram, &Tone::Inspirational);
        for (platform, tone) in [
            (Platform::Twitter, Tone::Inspirational),
            (Platform::Linkedin, Tone::Humorous),
            (Platform::Custom("mastodon".into()), Tone::Casual),
            (Platform::Facebook, Tone::Custom("snarky".into())),
        ] {
            assert_eq!(fallback_caption("tea", &platform, &tone), expected);
        }
        assert!(expected.starts_with("🌟 Amazing content about tea!"));
        assert!(expected.contains("#tea #Inspiration"));
    }

    #[test]
    fn test_topic_hashtag_strips_all_whitespace() {
        assert_eq!(topic_hashtag(" New\tYork  city "), "NewYorkcity");
    }

    #[test]
    fn test_topic_with_braces_is_not_reinterpolated() {
        let caption = fallback_caption("{hashtag}", &Platform::Instagram, &Tone::Inspirational);
        assert!(caption.contains("Amazing content about {hashtag}!"));
    }
}
