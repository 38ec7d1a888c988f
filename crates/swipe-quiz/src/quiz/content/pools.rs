use crate::quiz::domain::Scores;
use crate::quiz::question::PoolOption;
use serde::Serialize;

/// Editorial grouping for pools; only used for content variety reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolCategory {
    Lifestyle,
    Food,
    Travel,
    Social,
    Home,
    Learning,
    Style,
    Mood,
}

impl PoolCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Lifestyle => "Lifestyle",
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Social => "Social",
            Self::Home => "Home",
            Self::Learning => "Learning",
            Self::Style => "Style",
            Self::Mood => "Mood",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerPool {
    pub id: &'static str,
    pub category: PoolCategory,
    pub options: Vec<PoolOption>,
}

/// Reusable phrasing; `variants` are cycled on repeat use.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionStem {
    pub id: &'static str,
    pub text: &'static str,
    pub variants: Vec<&'static str>,
    pub pool_ids: Vec<&'static str>,
}

/// Stem-and-pool corpus backing the pool engine.
#[derive(Debug, Clone)]
pub struct PoolCorpus {
    stems: Vec<QuestionStem>,
    pools: Vec<AnswerPool>,
}

impl PoolCorpus {
    pub fn standard() -> Self {
        let stems = STEMS
            .iter()
            .map(|spec| QuestionStem {
                id: spec.id,
                text: spec.text,
                variants: spec.variants.to_vec(),
                pool_ids: spec.pools.to_vec(),
            })
            .collect();

        let pools = POOLS
            .iter()
            .map(|spec| AnswerPool {
                id: spec.id,
                category: spec.category,
                options: spec.options.iter().map(OptionSpec::build).collect(),
            })
            .collect();

        Self { stems, pools }
    }

    pub fn new(stems: Vec<QuestionStem>, pools: Vec<AnswerPool>) -> Self {
        Self { stems, pools }
    }

    pub fn stems(&self) -> &[QuestionStem] {
        &self.stems
    }

    pub fn pools(&self) -> &[AnswerPool] {
        &self.pools
    }

    pub fn pool(&self, id: &str) -> Option<&AnswerPool> {
        self.pools.iter().find(|pool| pool.id == id)
    }

    pub fn stem(&self, id: &str) -> Option<&QuestionStem> {
        self.stems.iter().find(|stem| stem.id == id)
    }
}

/// Builds an option, deriving its dominant archetype from the weights.
pub fn pool_option(
    id: &'static str,
    text: &'static str,
    emoji: &'static str,
    weights: [f64; 4],
) -> PoolOption {
    let weights = Scores::new(weights[0], weights[1], weights[2], weights[3]);
    PoolOption {
        id,
        text,
        emoji,
        weights,
        dominant: weights.dominant(),
    }
}

struct StemSpec {
    id: &'static str,
    text: &'static str,
    variants: &'static [&'static str],
    pools: &'static [&'static str],
}

struct PoolSpec {
    id: &'static str,
    category: PoolCategory,
    options: &'static [OptionSpec],
}

/// Weights are ordered pulse, glow, cozy, lore.
struct OptionSpec(&'static str, &'static str, &'static str, [f64; 4]);

impl OptionSpec {
    fn build(&self) -> PoolOption {
        pool_option(self.0, self.1, self.2, self.3)
    }
}

#[rustfmt::skip]
const STEMS: &[StemSpec] = &[
    StemSpec {
        id: "stem-weekend",
        text: "How do you spend a free Saturday?",
        variants: &["A blank Saturday appears. You...", "Your ideal day off looks like..."],
        pools: &["pool-weekend-morning", "pool-weekend-afternoon", "pool-weekend-evening", "pool-weekend-rainy"],
    },
    StemSpec {
        id: "stem-food",
        text: "Pick what's on your plate",
        variants: &["Dinner decision time", "Your cravings say..."],
        pools: &["pool-food-dinner", "pool-food-snack", "pool-food-dessert", "pool-food-breakfast"],
    },
    StemSpec {
        id: "stem-travel",
        text: "Where to next?",
        variants: &["Your passport is ready. You choose...", "Plan the getaway"],
        pools: &["pool-travel-destination", "pool-travel-lodging", "pool-travel-activity", "pool-travel-packing"],
    },
    StemSpec {
        id: "stem-social",
        text: "Your friends want plans",
        variants: &["The group chat is waiting on you", "Time to rally the crew"],
        pools: &["pool-social-party", "pool-social-hangout", "pool-social-gift", "pool-social-chat"],
    },
    StemSpec {
        id: "stem-home",
        text: "Make your space yours",
        variants: &["Home upgrade time", "Your place, your rules"],
        pools: &["pool-home-room", "pool-home-decor", "pool-home-scent", "pool-home-soundtrack"],
    },
    StemSpec {
        id: "stem-learn",
        text: "Something new to try",
        variants: &["Your curiosity is itching for...", "Pick your next obsession"],
        pools: &["pool-learn-class", "pool-learn-hobby", "pool-learn-media", "pool-learn-challenge"],
    },
    StemSpec {
        id: "stem-style",
        text: "Choose your look",
        variants: &["Getting dressed today means...", "Your style, your call"],
        pools: &["pool-style-outfit", "pool-style-accessory", "pool-style-color", "pool-style-shoes"],
    },
    StemSpec {
        id: "stem-vibe",
        text: "Which feels most like you?",
        variants: &["Trust your gut:", "Pick the one that just fits"],
        pools: &["pool-vibe-season", "pool-vibe-weather", "pool-vibe-animal", "pool-vibe-time"],
    },
];

#[rustfmt::skip]
const POOLS: &[PoolSpec] = &[
    PoolSpec {
        id: "pool-weekend-morning",
        category: PoolCategory::Lifestyle,
        options: &[
            OptionSpec("wkm-run", "Trail run at sunrise", "🏃", [0.9, 0.1, -0.3, -0.1]),
            OptionSpec("wkm-brunch", "Styled brunch with friends", "🥂", [0.2, 0.8, 0.1, -0.2]),
            OptionSpec("wkm-bed", "Pancakes in bed", "🥞", [-0.3, 0.0, 0.9, 0.1]),
            OptionSpec("wkm-market", "Antique market browsing", "🕰️", [-0.1, 0.2, 0.1, 0.8]),
        ],
    },
    PoolSpec {
        id: "pool-weekend-afternoon",
        category: PoolCategory::Lifestyle,
        options: &[
            OptionSpec("wka-kayak", "Kayaking the river", "🛶", [0.9, -0.1, -0.2, 0.1]),
            OptionSpec("wka-gallery", "Gallery hopping", "🖼️", [-0.1, 0.8, -0.1, 0.3]),
            OptionSpec("wka-nap", "A long, glorious nap", "😴", [-0.4, 0.1, 1.0, -0.1]),
            OptionSpec("wka-library", "Lost in the library stacks", "📚", [-0.2, -0.1, 0.2, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-weekend-evening",
        category: PoolCategory::Lifestyle,
        options: &[
            OptionSpec("wke-club", "Out dancing till late", "🪩", [1.0, 0.3, -0.4, -0.2]),
            OptionSpec("wke-rooftop", "Rooftop cocktails at sunset", "🍸", [0.3, 0.9, -0.1, -0.2]),
            OptionSpec("wke-movie", "Comfort movie and takeout", "🍿", [-0.3, -0.1, 0.9, 0.0]),
            OptionSpec("wke-trivia", "Pub trivia showdown", "🧠", [0.2, -0.2, 0.0, 0.8]),
        ],
    },
    PoolSpec {
        id: "pool-weekend-rainy",
        category: PoolCategory::Lifestyle,
        options: &[
            OptionSpec("wkr-puddles", "Puddle jumping anyway", "🌧️", [0.8, 0.0, -0.1, -0.2]),
            OptionSpec("wkr-spa", "At-home spa day", "🛁", [-0.2, 0.9, 0.3, -0.2]),
            OptionSpec("wkr-soup", "Soup and a blanket", "🥣", [-0.3, -0.1, 0.9, 0.1]),
            OptionSpec("wkr-doc", "Documentary marathon", "🎞️", [-0.2, -0.1, 0.3, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-food-dinner",
        category: PoolCategory::Food,
        options: &[
            OptionSpec("fdi-street", "Street food crawl", "🌮", [0.9, 0.0, -0.1, 0.1]),
            OptionSpec("fdi-tasting", "Chef's tasting menu", "🍽️", [0.0, 0.9, -0.2, 0.2]),
            OptionSpec("fdi-stew", "Grandma's stew recipe", "🍲", [-0.3, -0.2, 1.0, 0.2]),
            OptionSpec("fdi-regional", "A dish from a country you're studying", "🍛", [0.1, -0.1, -0.1, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-food-snack",
        category: PoolCategory::Food,
        options: &[
            OptionSpec("fsn-spicy", "The spiciest chips available", "🌶️", [0.9, -0.2, -0.1, 0.0]),
            OptionSpec("fsn-board", "A gorgeous snack board", "🧀", [0.0, 0.9, 0.2, -0.1]),
            OptionSpec("fsn-cookies", "Warm cookies from the oven", "🍪", [-0.2, 0.0, 0.9, -0.1]),
            OptionSpec("fsn-exotic", "A fruit you've never heard of", "🥭", [0.2, 0.0, -0.2, 0.8]),
        ],
    },
    PoolSpec {
        id: "pool-food-dessert",
        category: PoolCategory::Food,
        options: &[
            OptionSpec("fde-sparkler", "Anything served with a sparkler", "🎇", [0.8, 0.3, -0.2, -0.2]),
            OptionSpec("fde-macarons", "Pastel macarons", "🧁", [-0.1, 0.9, 0.1, -0.1]),
            OptionSpec("fde-crumble", "Apple crumble and custard", "🥧", [-0.3, -0.1, 0.9, 0.1]),
            OptionSpec("fde-historic", "A dessert with a 500-year history", "🍮", [-0.1, 0.1, 0.0, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-food-breakfast",
        category: PoolCategory::Food,
        options: &[
            OptionSpec("fbr-smoothie", "Protein smoothie on the go", "🥤", [0.9, 0.1, -0.3, -0.1]),
            OptionSpec("fbr-acai", "Photogenic açaí bowl", "🫐", [0.1, 0.9, -0.1, -0.2]),
            OptionSpec("fbr-fryup", "Slow fry-up in pajamas", "🍳", [-0.3, -0.2, 0.9, 0.0]),
            OptionSpec("fbr-paper", "Coffee and the long newspaper read", "📰", [-0.2, -0.1, 0.3, 0.8]),
        ],
    },
    PoolSpec {
        id: "pool-travel-destination",
        category: PoolCategory::Travel,
        options: &[
            OptionSpec("tde-alps", "Alpine peaks", "🏔️", [0.9, 0.1, -0.2, 0.0]),
            OptionSpec("tde-amalfi", "The Amalfi coast", "🏖️", [0.1, 0.9, 0.0, -0.2]),
            OptionSpec("tde-cabin", "A lakeside cabin", "🛖", [-0.2, 0.0, 0.9, 0.1]),
            OptionSpec("tde-rome", "Ancient Rome", "🏛️", [0.0, 0.1, -0.2, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-travel-lodging",
        category: PoolCategory::Travel,
        options: &[
            OptionSpec("tlo-hostel", "Hostel with a pub crawl", "🛏️", [0.9, -0.2, -0.1, 0.1]),
            OptionSpec("tlo-boutique", "Boutique design hotel", "🏨", [0.0, 0.9, 0.1, -0.1]),
            OptionSpec("tlo-bnb", "Farmhouse B&B with a fireplace", "🏡", [-0.3, 0.0, 0.9, 0.1]),
            OptionSpec("tlo-castle", "A converted castle", "🏰", [0.0, 0.3, -0.1, 0.8]),
        ],
    },
    PoolSpec {
        id: "pool-travel-activity",
        category: PoolCategory::Travel,
        options: &[
            OptionSpec("tac-zipline", "Zipline through the canopy", "🌲", [1.0, -0.1, -0.3, -0.1]),
            OptionSpec("tac-sunset", "Sunset sailing", "⛵", [0.2, 0.9, 0.1, -0.2]),
            OptionSpec("tac-cooking", "A home-cooking class", "👩‍🍳", [-0.2, 0.0, 0.8, 0.2]),
            OptionSpec("tac-guide", "Private tour with a historian", "🗺️", [-0.1, -0.1, 0.0, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-travel-packing",
        category: PoolCategory::Travel,
        options: &[
            OptionSpec("tpa-backpack", "One backpack, zero plans", "🎒", [0.9, -0.3, -0.1, 0.1]),
            OptionSpec("tpa-outfits", "An outfit for every photo", "👗", [0.0, 1.0, -0.2, -0.2]),
            OptionSpec("tpa-pillow", "Your own pillow, obviously", "🛌", [-0.3, 0.0, 0.9, -0.1]),
            OptionSpec("tpa-guidebook", "Three annotated guidebooks", "📗", [-0.1, -0.1, 0.0, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-social-party",
        category: PoolCategory::Social,
        options: &[
            OptionSpec("spa-rager", "A house party that goes till 2am", "🎉", [1.0, 0.1, -0.3, -0.2]),
            OptionSpec("spa-gala", "A themed gala", "🎭", [0.2, 0.9, -0.2, 0.0]),
            OptionSpec("spa-potluck", "A potluck with close friends", "🥘", [-0.2, 0.0, 0.9, 0.0]),
            OptionSpec("spa-mystery", "A murder mystery dinner", "🕵️", [0.1, 0.1, 0.0, 0.8]),
        ],
    },
    PoolSpec {
        id: "pool-social-hangout",
        category: PoolCategory::Social,
        options: &[
            OptionSpec("sha-arcade", "Arcade tournament", "🕹️", [0.9, 0.0, 0.0, -0.1]),
            OptionSpec("sha-thrift", "Thrifting for outfits", "🛍️", [0.1, 0.8, 0.0, -0.1]),
            OptionSpec("sha-games", "Board games on the floor", "🎲", [-0.1, -0.2, 0.9, 0.2]),
            OptionSpec("sha-museum", "Late night at the museum", "🦕", [0.0, 0.2, -0.2, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-social-gift",
        category: PoolCategory::Social,
        options: &[
            OptionSpec("sgi-tickets", "Concert tickets", "🎟️", [0.9, 0.2, -0.2, -0.1]),
            OptionSpec("sgi-jewelry", "Delicate gold jewelry", "💍", [-0.1, 0.9, 0.0, 0.0]),
            OptionSpec("sgi-blanket", "A weighted blanket", "🧶", [-0.3, 0.0, 1.0, 0.0]),
            OptionSpec("sgi-firsted", "A first-edition book", "📕", [-0.2, 0.1, 0.1, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-social-chat",
        category: PoolCategory::Social,
        options: &[
            OptionSpec("sch-dare", "Truth or dare", "😈", [0.9, 0.0, -0.1, -0.2]),
            OptionSpec("sch-moodboard", "Sharing mood boards", "📌", [-0.1, 0.9, 0.1, 0.0]),
            OptionSpec("sch-heart", "Heart-to-heart on the couch", "💬", [-0.2, 0.0, 0.9, 0.1]),
            OptionSpec("sch-debate", "Debating a wild theory", "🧩", [0.1, -0.2, -0.1, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-home-room",
        category: PoolCategory::Home,
        options: &[
            OptionSpec("hro-gym", "A home gym", "🏋️", [0.9, 0.1, -0.2, -0.2]),
            OptionSpec("hro-vanity", "A glam vanity corner", "🪞", [0.0, 0.9, 0.1, -0.2]),
            OptionSpec("hro-nook", "A reading nook with pillows", "🛋️", [-0.2, 0.0, 0.9, 0.3]),
            OptionSpec("hro-study", "A study lined with books", "📖", [-0.2, 0.0, 0.1, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-home-decor",
        category: PoolCategory::Home,
        options: &[
            OptionSpec("hde-posters", "Gig posters everywhere", "🎸", [0.8, 0.2, -0.1, 0.0]),
            OptionSpec("hde-plants", "A curated plant wall", "🪴", [0.0, 0.9, 0.2, -0.1]),
            OptionSpec("hde-quilts", "Handmade quilts", "🧵", [-0.2, 0.1, 0.9, 0.0]),
            OptionSpec("hde-maps", "Framed antique maps", "🗺️", [0.0, 0.1, -0.1, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-home-scent",
        category: PoolCategory::Home,
        options: &[
            OptionSpec("hsc-citrus", "Zesty citrus", "🍋", [0.9, 0.1, -0.2, -0.1]),
            OptionSpec("hsc-rose", "Rose and jasmine", "🌹", [-0.1, 0.9, 0.1, 0.0]),
            OptionSpec("hsc-vanilla", "Vanilla and cinnamon", "🧁", [-0.2, 0.0, 0.9, 0.0]),
            OptionSpec("hsc-paper", "Old paper and cedar", "🪵", [-0.2, -0.1, 0.2, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-home-soundtrack",
        category: PoolCategory::Home,
        options: &[
            OptionSpec("hso-edm", "Loud EDM while cleaning", "🎧", [1.0, 0.0, -0.2, -0.2]),
            OptionSpec("hso-dreampop", "Dreamy pop on vinyl", "💿", [0.0, 0.9, 0.1, 0.0]),
            OptionSpec("hso-rain", "Rain sounds and lo-fi", "🌧️", [-0.3, 0.1, 0.9, 0.0]),
            OptionSpec("hso-lecture", "A lecture podcast", "🎙️", [-0.1, -0.2, 0.0, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-learn-class",
        category: PoolCategory::Learning,
        options: &[
            OptionSpec("lcl-boxing", "Boxing", "🥊", [1.0, -0.1, -0.2, -0.1]),
            OptionSpec("lcl-photo", "Film photography", "📷", [0.0, 0.9, -0.1, 0.2]),
            OptionSpec("lcl-bread", "Bread baking", "🍞", [-0.2, 0.0, 0.9, 0.1]),
            OptionSpec("lcl-philosophy", "Intro to philosophy", "🏺", [-0.2, 0.0, 0.0, 1.0]),
        ],
    },
    PoolSpec {
        id: "pool-learn-hobby",
        category: PoolCategory::Learning,
        options: &[
            OptionSpec("lho-climb", "Bouldering", "🧗", [0.9, 0.1, -0.3, 0.0]),
            OptionSpec("lho-paint", "Watercolor painting", "🎨", [-0.1, 0.9, 0.2, 0.0]),
            OptionSpec("lho-knit", "Knitting", "🧶", [-0.3, 0.1, 0.9, 0.0]),
            OptionSpec("lho-chess", "Chess openings", "♟️", [0.0, -0.2, 0.1, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-learn-media",
        category: PoolCategory::Learning,
        options: &[
            OptionSpec("lme-action", "An action blockbuster", "💥", [0.9, 0.0, -0.1, -0.2]),
            OptionSpec("lme-fashion", "A fashion documentary", "👠", [0.0, 0.9, 0.0, 0.1]),
            OptionSpec("lme-sitcom", "A comfort sitcom rewatch", "📺", [-0.1, -0.1, 0.9, -0.1]),
            OptionSpec("lme-mystery", "An unsolved-mystery series", "🔍", [0.0, -0.1, 0.0, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-learn-challenge",
        category: PoolCategory::Learning,
        options: &[
            OptionSpec("lch-marathon", "Run a half marathon", "🏅", [1.0, 0.0, -0.3, -0.1]),
            OptionSpec("lch-glowup", "A 30-day glow-up", "✨", [0.1, 0.9, 0.0, -0.2]),
            OptionSpec("lch-recipes", "Cook every family recipe", "📒", [-0.2, 0.0, 0.9, 0.2]),
            OptionSpec("lch-books", "Read 50 books this year", "📚", [-0.2, 0.0, 0.1, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-style-outfit",
        category: PoolCategory::Style,
        options: &[
            OptionSpec("sou-athleisure", "Athleisure, ready to move", "👟", [0.9, 0.0, 0.1, -0.2]),
            OptionSpec("sou-statement", "A statement dress", "👗", [0.1, 1.0, -0.2, -0.1]),
            OptionSpec("sou-sweats", "Oversized sweats", "🧦", [-0.2, -0.2, 0.9, 0.0]),
            OptionSpec("sou-tweed", "Tweed blazer, elbow patches", "🧥", [-0.2, 0.1, 0.0, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-style-accessory",
        category: PoolCategory::Style,
        options: &[
            OptionSpec("sac-watch", "A fitness watch", "⌚", [0.9, 0.0, -0.1, 0.1]),
            OptionSpec("sac-sunnies", "Designer sunglasses", "🕶️", [0.2, 0.9, -0.2, -0.2]),
            OptionSpec("sac-scarf", "A chunky scarf", "🧣", [-0.2, 0.1, 0.9, 0.0]),
            OptionSpec("sac-locket", "A vintage locket with a story", "📿", [-0.2, 0.2, 0.1, 0.8]),
        ],
    },
    PoolSpec {
        id: "pool-style-color",
        category: PoolCategory::Style,
        options: &[
            OptionSpec("sco-red", "Electric red", "🔴", [0.9, 0.2, -0.2, -0.1]),
            OptionSpec("sco-blush", "Blush pink", "🌸", [-0.1, 0.9, 0.2, -0.1]),
            OptionSpec("sco-oat", "Oatmeal beige", "🤎", [-0.3, 0.0, 0.9, 0.1]),
            OptionSpec("sco-navy", "Deep navy", "🔵", [-0.1, 0.0, 0.0, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-style-shoes",
        category: PoolCategory::Style,
        options: &[
            OptionSpec("ssh-trail", "Trail runners", "🥾", [0.9, -0.2, 0.0, 0.0]),
            OptionSpec("ssh-heels", "Sculptural heels", "👠", [0.0, 0.9, -0.3, 0.0]),
            OptionSpec("ssh-slippers", "Sheepskin slippers", "🥿", [-0.3, 0.0, 1.0, 0.0]),
            OptionSpec("ssh-loafers", "Well-worn loafers", "👞", [-0.1, 0.1, 0.1, 0.8]),
        ],
    },
    PoolSpec {
        id: "pool-vibe-season",
        category: PoolCategory::Mood,
        options: &[
            OptionSpec("vse-summer", "Peak summer", "☀️", [0.9, 0.2, -0.2, -0.2]),
            OptionSpec("vse-spring", "Blooming spring", "🌷", [0.1, 0.9, 0.0, -0.1]),
            OptionSpec("vse-winter", "Snowed-in winter", "❄️", [-0.3, 0.0, 0.9, 0.2]),
            OptionSpec("vse-autumn", "Misty autumn", "🍂", [-0.1, 0.1, 0.2, 0.8]),
        ],
    },
    PoolSpec {
        id: "pool-vibe-weather",
        category: PoolCategory::Mood,
        options: &[
            OptionSpec("vwe-storm", "A wild thunderstorm", "⛈️", [0.8, -0.1, -0.1, 0.2]),
            OptionSpec("vwe-golden", "Golden hour haze", "🌅", [0.0, 1.0, 0.0, -0.1]),
            OptionSpec("vwe-drizzle", "Gentle drizzle on the window", "🌦️", [-0.3, 0.0, 0.9, 0.1]),
            OptionSpec("vwe-fog", "Mysterious fog", "🌫️", [-0.1, 0.0, 0.0, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-vibe-animal",
        category: PoolCategory::Mood,
        options: &[
            OptionSpec("van-otter", "A playful otter", "🦦", [0.9, 0.0, 0.1, -0.2]),
            OptionSpec("van-peacock", "A peacock", "🦚", [0.1, 1.0, -0.2, -0.1]),
            OptionSpec("van-cat", "A sleepy cat", "🐈", [-0.3, 0.0, 0.9, 0.1]),
            OptionSpec("van-owl", "A wise owl", "🦉", [-0.2, 0.0, 0.1, 0.9]),
        ],
    },
    PoolSpec {
        id: "pool-vibe-time",
        category: PoolCategory::Mood,
        options: &[
            OptionSpec("vti-noon", "High noon", "🕛", [0.9, 0.1, -0.2, -0.1]),
            OptionSpec("vti-dusk", "Dusk", "🌆", [0.0, 0.9, 0.1, 0.0]),
            OptionSpec("vti-evening", "Early evening, lamps on", "🛋️", [-0.2, 0.1, 0.9, 0.0]),
            OptionSpec("vti-midnight", "Midnight", "🌌", [0.0, -0.1, -0.1, 0.9]),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::domain::Archetype;

    #[test]
    fn standard_corpus_has_enough_pools_for_a_full_session() {
        let corpus = PoolCorpus::standard();
        assert_eq!(corpus.stems().len(), 8);
        assert!(corpus.pools().len() >= 30);
    }

    #[test]
    fn every_pool_offers_each_dominant_archetype() {
        let corpus = PoolCorpus::standard();
        for pool in corpus.pools() {
            for archetype in Archetype::ordered() {
                assert!(
                    pool.options.iter().any(|option| option.dominant == archetype),
                    "{} lacks a {archetype} option",
                    pool.id
                );
            }
        }
    }

    #[test]
    fn pool_option_derives_dominant_archetype() {
        let option = pool_option("x", "x", "x", [0.1, -0.4, 0.2, 0.15]);
        assert_eq!(option.dominant, Archetype::Cozy);
    }
}
