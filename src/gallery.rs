use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: u32,
    pub prompt: &'static str,
    pub image_url: &'static str,
    pub category: &'static str,
}

static ITEMS: [GalleryItem; 8] = [
    GalleryItem {
        id: 1,
        prompt: "A lone cyberpunk hacker, vibrant neon lights reflecting off a rainy Tokyo street, intricate data streams, wide-angle shot, cinematic lighting, 8K, highly detailed.",
        image_url: "https://placehold.co/800x600/2a2a2a/ffffff?text=Cyberpunk",
        category: "Cyberpunk",
    },
    GalleryItem {
        id: 2,
        prompt: "An ancient elven archer standing on a moss-covered rock in a misty, enchanted forest, rays of sunlight piercing through the canopy, epic fantasy art, high detail, volumetric lighting.",
        image_url: "https://placehold.co/800x600/1a3a2a/ffffff?text=Fantasy",
        category: "Fantasy",
    },
    GalleryItem {
        id: 3,
        prompt: "A person in a bright yellow swimsuit relaxing on a sun-drenched beach, clear turquoise water, palm trees swaying gently, golden hour, photorealistic, 4K.",
        image_url: "https://placehold.co/800x600/f0e0a0/000000?text=Nature",
        category: "Nature",
    },
    GalleryItem {
        id: 4,
        prompt: "A futuristic astronaut exploring a desolate Martian landscape, sleek white spacesuit, advanced rover nearby, red dust, dramatic low-angle shot, sci-fi photography, ultra realistic.",
        image_url: "https://placehold.co/800x600/d06040/ffffff?text=Sci-Fi",
        category: "Sci-Fi",
    },
    GalleryItem {
        id: 5,
        prompt: "A whimsical cottage nestled in a vibrant mushroom forest, glowing bioluminescent plants, soft magical light, intricate details, fairytale illustration style.",
        image_url: "https://placehold.co/800x600/a050d0/ffffff?text=Whimsical",
        category: "Fantasy",
    },
    GalleryItem {
        id: 6,
        prompt: "A sleek, black sports car speeding through a modern city tunnel at night, streaks of light, dynamic motion blur, cinematic action shot, 4K, aggressive styling.",
        image_url: "https://placehold.co/800x600/1a1a1a/ffffff?text=Vehicles",
        category: "Vehicles",
    },
    GalleryItem {
        id: 7,
        prompt: "A majestic dragon perched atop a snowy mountain peak, breathing icy mist, dramatic sunset sky, highly detailed scales, epic fantasy painting.",
        image_url: "https://placehold.co/800x600/c0c0e0/000000?text=Dragon",
        category: "Fantasy",
    },
    GalleryItem {
        id: 8,
        prompt: "A vintage detective in a trench coat walking down a dimly lit alley in a 1940s film noir city, rain puddles reflecting streetlights, dramatic shadows, black and white.",
        image_url: "https://placehold.co/800x600/4a4a4a/ffffff?text=Film+Noir",
        category: "Vintage",
    },
];

/// Predefined inspiration prompts.
pub fn items() -> &'static [GalleryItem] {
    &ITEMS
}

pub fn by_category(category: &str) -> Vec<&'static GalleryItem> {
    ITEMS
        .iter()
        .filter(|item| item.category.eq_ignore_ascii_case(category))
        .collect()
}

pub fn categories() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for item in &ITEMS {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    seen
}
