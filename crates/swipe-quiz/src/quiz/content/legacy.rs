use crate::quiz::domain::Archetype::{self, Cozy, Glow, Lore, Pulse};
use crate::quiz::domain::MirrorDirection::{AsIs, Flipped};
use crate::quiz::domain::{ArchetypePair, Matchup, MirrorDirection};
use crate::quiz::question::{
    ArchetypeOption, BaseQuestion, ComboQuestion, MirrorOption, MirrorQuestion,
};

/// Static three-phase question corpus.
#[derive(Debug, Clone)]
pub struct LegacyCorpus {
    base: Vec<BaseQuestion>,
    combo: Vec<ComboQuestion>,
    mirror: Vec<MirrorQuestion>,
}

impl LegacyCorpus {
    pub fn standard() -> Self {
        Self {
            base: BASE_QUESTIONS.to_vec(),
            combo: COMBO_QUESTIONS.to_vec(),
            mirror: MIRROR_QUESTIONS.to_vec(),
        }
    }

    pub fn new(
        base: Vec<BaseQuestion>,
        combo: Vec<ComboQuestion>,
        mirror: Vec<MirrorQuestion>,
    ) -> Self {
        Self {
            base,
            combo,
            mirror,
        }
    }

    pub fn base_questions(&self) -> &[BaseQuestion] {
        &self.base
    }

    pub fn combo_questions(&self) -> &[ComboQuestion] {
        &self.combo
    }

    pub fn mirror_questions(&self) -> &[MirrorQuestion] {
        &self.mirror
    }

    pub fn base_for_pair(&self, pair: ArchetypePair) -> impl Iterator<Item = &BaseQuestion> {
        self.base.iter().filter(move |question| question.pair == pair)
    }

    pub fn combo_for_matchup(&self, matchup: Matchup) -> impl Iterator<Item = &ComboQuestion> {
        self.combo
            .iter()
            .filter(move |question| question.matchup == matchup)
    }

    pub fn combo_for_primary(&self, primary: Archetype) -> impl Iterator<Item = &ComboQuestion> {
        self.combo
            .iter()
            .filter(move |question| question.matchup.primary == primary)
    }

    pub fn mirror_for_pair(&self, pair: ArchetypePair) -> impl Iterator<Item = &MirrorQuestion> {
        self.mirror
            .iter()
            .filter(move |question| question.pair == pair)
    }
}

const fn pick(text: &'static str, emoji: &'static str, archetype: Archetype) -> ArchetypeOption {
    ArchetypeOption {
        text,
        emoji,
        archetype,
    }
}

const fn base(
    id: &'static str,
    prompt: &'static str,
    left: ArchetypeOption,
    right: ArchetypeOption,
) -> BaseQuestion {
    BaseQuestion {
        id,
        prompt,
        pair: ArchetypePair::canonical(left.archetype, right.archetype),
        left,
        right,
    }
}

const fn combo(
    id: &'static str,
    prompt: &'static str,
    primary: Archetype,
    left: ArchetypeOption,
    right: ArchetypeOption,
) -> ComboQuestion {
    ComboQuestion {
        id,
        prompt,
        matchup: Matchup::new(primary, left.archetype, right.archetype),
        left,
        right,
    }
}

const fn lean(text: &'static str, emoji: &'static str, direction: MirrorDirection) -> MirrorOption {
    MirrorOption {
        text,
        emoji,
        direction,
    }
}

const fn mirror(
    id: &'static str,
    prompt: &'static str,
    pair: ArchetypePair,
    left: MirrorOption,
    right: MirrorOption,
) -> MirrorQuestion {
    MirrorQuestion {
        id,
        prompt,
        pair,
        left,
        right,
    }
}

const PULSE_GLOW: ArchetypePair = ArchetypePair::canonical(Pulse, Glow);
const PULSE_COZY: ArchetypePair = ArchetypePair::canonical(Pulse, Cozy);
const PULSE_LORE: ArchetypePair = ArchetypePair::canonical(Pulse, Lore);
const GLOW_COZY: ArchetypePair = ArchetypePair::canonical(Glow, Cozy);
const GLOW_LORE: ArchetypePair = ArchetypePair::canonical(Glow, Lore);
const COZY_LORE: ArchetypePair = ArchetypePair::canonical(Cozy, Lore);

#[rustfmt::skip]
const BASE_QUESTIONS: &[BaseQuestion] = &[
    // pulse / glow
    base("base-pg-1", "Friday night plans?", pick("Packed rooftop party", "🎉", Pulse), pick("Golden-hour photo walk", "🌇", Glow)),
    base("base-pg-2", "Pick a playlist", pick("Soft synth and candlelight", "🕯️", Glow), pick("Festival bangers on repeat", "🔊", Pulse)),
    base("base-pg-3", "Your ideal workout", pick("Sunrise yoga with a view", "🧘", Glow), pick("Sprint intervals with friends", "🏃", Pulse)),
    base("base-pg-4", "Best souvenir", pick("A wild story from the trip", "🏄", Pulse), pick("A hand-painted ceramic bowl", "🏺", Glow)),
    base("base-pg-5", "Weekend wardrobe", pick("Sneakers ready for anything", "👟", Pulse), pick("A carefully styled fit", "✨", Glow)),
    // pulse / cozy
    base("base-pc-1", "Snow day!", pick("Sledding until dark", "🛷", Pulse), pick("Blanket fort and cocoa", "☕", Cozy)),
    base("base-pc-2", "Birthday vibe", pick("Dinner for four at home", "🍲", Cozy), pick("Surprise karaoke takeover", "🎤", Pulse)),
    base("base-pc-3", "Rainy Sunday", pick("Splash through puddles on a bike", "🚲", Pulse), pick("Soup simmering all afternoon", "🥣", Cozy)),
    base("base-pc-4", "Dream home feature", pick("A window seat with pillows", "🪟", Cozy), pick("A climbing wall in the garage", "🧗", Pulse)),
    base("base-pc-5", "Road trip role", pick("Driver with the aux cord", "🚗", Pulse), pick("Snack packer and napper", "🧺", Cozy)),
    // pulse / lore
    base("base-pl-1", "Museum visit", pick("Reading every placard", "📜", Lore), pick("Racing to the interactive wing", "🕹️", Pulse)),
    base("base-pl-2", "New city, day one", pick("Jump on a rental scooter", "🛴", Pulse), pick("Walking tour with a historian", "🏛️", Lore)),
    base("base-pl-3", "Group chat role", pick("Starting the spontaneous plan", "📣", Pulse), pick("Dropping the deep-dive link", "🔗", Lore)),
    base("base-pl-4", "Summer project", pick("Learning an ancient language", "🔤", Lore), pick("Training for a triathlon", "🏊", Pulse)),
    base("base-pl-5", "Late-night energy", pick("Dance floor till close", "🪩", Pulse), pick("Wiki rabbit hole till 3am", "🕳️", Lore)),
    // glow / cozy
    base("base-gc-1", "Perfect bath", pick("Rose petals and a face mask", "🌹", Glow), pick("Fuzzy socks straight after", "🧦", Cozy)),
    base("base-gc-2", "Decor priority", pick("Softest couch in the world", "🛋️", Cozy), pick("A statement art piece", "🖼️", Glow)),
    base("base-gc-3", "Gift you love getting", pick("A heavy knit blanket", "🧶", Cozy), pick("A luxe perfume", "💐", Glow)),
    base("base-gc-4", "Morning routine", pick("Ten-step skincare ritual", "🧴", Glow), pick("Slow breakfast in pajamas", "🥞", Cozy)),
    base("base-gc-5", "Favorite light", pick("Neon sign glow", "💡", Glow), pick("Crackling fireplace", "🔥", Cozy)),
    // glow / lore
    base("base-gl-1", "Bookstore haul", pick("A gorgeous coffee-table book", "📔", Glow), pick("A dense history paperback", "📚", Lore)),
    base("base-gl-2", "Art gallery", pick("Learning the painter's backstory", "🎨", Lore), pick("Finding the most beautiful piece", "🌸", Glow)),
    base("base-gl-3", "Journal style", pick("Pressed flowers and washi tape", "🌼", Glow), pick("Lists of theories and questions", "📝", Lore)),
    base("base-gl-4", "Podcast pick", pick("Unsolved mysteries", "🔍", Lore), pick("Beauty and design interviews", "💄", Glow)),
    base("base-gl-5", "Dream class", pick("Astronomy after dark", "🔭", Lore), pick("Floral arranging", "💮", Glow)),
    // cozy / lore
    base("base-cl-1", "Evening in", pick("Rewatching a comfort show", "📺", Cozy), pick("A documentary marathon", "🎞️", Lore)),
    base("base-cl-2", "Tea time reading", pick("A cozy village mystery", "🫖", Cozy), pick("A biography of a scientist", "🧪", Lore)),
    base("base-cl-3", "Hobby to start", pick("Researching your family tree", "🌳", Lore), pick("Baking sourdough", "🍞", Cozy)),
    base("base-cl-4", "Cabin weekend", pick("Board games by the stove", "🎲", Cozy), pick("Mapping old trails", "🗺️", Lore)),
    base("base-cl-5", "Favorite question", pick("How does that work?", "⚙️", Lore), pick("Who wants seconds?", "🍪", Cozy)),
];

#[rustfmt::skip]
const COMBO_QUESTIONS: &[ComboQuestion] = &[
    // pulse primary
    combo("combo-p-gc-1", "After the big game you want...", Pulse, pick("Photos at the after-party", "📸", Glow), pick("Pizza on the couch", "🍕", Cozy)),
    combo("combo-p-gc-2", "Adventure souvenir", Pulse, pick("Matching cozy hoodies", "🧥", Cozy), pick("A sunset time-lapse", "🌅", Glow)),
    combo("combo-p-gl-1", "Road trip stop", Pulse, pick("A neon diner for photos", "🌃", Glow), pick("A roadside history marker", "🪧", Lore)),
    combo("combo-p-gl-2", "Festival highlight", Pulse, pick("The artist's origin story", "🎸", Lore), pick("The light show", "🎆", Glow)),
    combo("combo-p-cl-1", "Campout plan", Pulse, pick("Campfire stew for everyone", "🍢", Cozy), pick("Stargazing with a sky chart", "🌌", Lore)),
    combo("combo-p-cl-2", "Team captain perk", Pulse, pick("Learning the playbook inside out", "📋", Lore), pick("Hosting the team dinner", "🍝", Cozy)),
    // glow primary
    combo("combo-g-pc-1", "Styled shoot location", Glow, pick("Mid-run on a city bridge", "🌉", Pulse), pick("Curled up in a reading nook", "📖", Cozy)),
    combo("combo-g-pc-2", "Self-care day", Glow, pick("Candles and a long nap", "😴", Cozy), pick("Dance class and a facial", "💃", Pulse)),
    combo("combo-g-pl-1", "Beautiful trip", Glow, pick("Cliff diving at a lagoon", "🌊", Pulse), pick("Ancient temple ruins", "🛕", Lore)),
    combo("combo-g-pl-2", "Aesthetic hobby", Glow, pick("Calligraphy of old poems", "🖋️", Lore), pick("Roller skating at dusk", "🛼", Pulse)),
    combo("combo-g-cl-1", "Dream studio", Glow, pick("Plush rug and warm lamps", "🏮", Cozy), pick("Shelves of rare art books", "📕", Lore)),
    combo("combo-g-cl-2", "Pretty evening", Glow, pick("A lecture at the planetarium", "🪐", Lore), pick("Candlelit dinner at home", "🕯️", Cozy)),
    // cozy primary
    combo("combo-c-pg-1", "Hosting upgrade", Cozy, pick("A dance-off after dessert", "🕺", Pulse), pick("A beautifully set table", "🍽️", Glow)),
    combo("combo-c-pg-2", "Weekend at home", Cozy, pick("Redecorating the bedroom", "🪴", Glow), pick("Backyard games with friends", "🥏", Pulse)),
    combo("combo-c-pl-1", "Winter evening", Cozy, pick("Ice skating then cocoa", "⛸️", Pulse), pick("Fireside ghost stories", "👻", Lore)),
    combo("combo-c-pl-2", "Sunday ritual", Cozy, pick("Crossword by the window", "✏️", Lore), pick("Long walk with the dog", "🐕", Pulse)),
    combo("combo-c-gl-1", "Blanket fort add-on", Cozy, pick("Fairy lights everywhere", "🌟", Glow), pick("A stack of mystery novels", "🕵️", Lore)),
    combo("combo-c-gl-2", "Kitchen project", Cozy, pick("Recreating a medieval recipe", "🍯", Lore), pick("A picture-perfect cake", "🎂", Glow)),
    // lore primary
    combo("combo-l-pg-1", "Field research trip", Lore, pick("Hiking to a remote dig site", "⛏️", Pulse), pick("Sketching the local flowers", "🌺", Glow)),
    combo("combo-l-pg-2", "Study break", Lore, pick("A quick pottery session", "🫙", Glow), pick("A pickup basketball game", "🏀", Pulse)),
    combo("combo-l-pc-1", "Library day", Lore, pick("Beanbag and a thermos", "🧋", Cozy), pick("Speed-reading challenge", "⏱️", Pulse)),
    combo("combo-l-pc-2", "Trivia night", Lore, pick("Buzzing in first, loudly", "🔔", Pulse), pick("Hosting it at your place", "🏠", Cozy)),
    combo("combo-l-gc-1", "Ideal archive", Lore, pick("A stunning old map room", "🧭", Glow), pick("A reading room with armchairs", "🪑", Cozy)),
    combo("combo-l-gc-2", "Research notes", Lore, pick("Tucked in bed with cocoa", "🛏️", Cozy), pick("Color-coded and illustrated", "🖍️", Glow)),
];

#[rustfmt::skip]
const MIRROR_QUESTIONS: &[MirrorQuestion] = &[
    // pulse / glow
    mirror("mirror-pg-1", "Which comes first?", PULSE_GLOW, lean("The thrill", "⚡", AsIs), lean("The aesthetic", "🌷", Flipped)),
    mirror("mirror-pg-2", "Friends describe you as...", PULSE_GLOW, lean("Radiant", "🌞", Flipped), lean("Unstoppable", "🚀", AsIs)),
    mirror("mirror-pg-3", "A perfect photo is...", PULSE_GLOW, lean("Mid-jump, a little blurry", "🤸", AsIs), lean("Framed just right", "🖼️", Flipped)),
    mirror("mirror-pg-4", "You recharge by...", PULSE_GLOW, lean("Pampering yourself", "🛁", Flipped), lean("Moving your body", "🏋️", AsIs)),
    mirror("mirror-pg-5", "Your motto", PULSE_GLOW, lean("Go big", "🔥", AsIs), lean("Look good doing it", "💅", Flipped)),
    // pulse / cozy
    mirror("mirror-pc-1", "Which comes first?", PULSE_COZY, lean("The adventure", "🧗", AsIs), lean("Coming home after", "🏡", Flipped)),
    mirror("mirror-pc-2", "Your ideal Saturday starts...", PULSE_COZY, lean("Slowly, under a blanket", "🛌", Flipped), lean("Early, already outside", "🌄", AsIs)),
    mirror("mirror-pc-3", "Friends describe you as...", PULSE_COZY, lean("The spark", "🎇", AsIs), lean("The safe place", "🤗", Flipped)),
    mirror("mirror-pc-4", "Best part of a trip", PULSE_COZY, lean("Your own bed after", "🛏️", Flipped), lean("The wild first day", "🎢", AsIs)),
    mirror("mirror-pc-5", "You'd rather host...", PULSE_COZY, lean("A backyard tournament", "🏆", AsIs), lean("A soup night", "🍜", Flipped)),
    // pulse / lore
    mirror("mirror-pl-1", "Which comes first?", PULSE_LORE, lean("Doing it", "🏃", AsIs), lean("Understanding it", "🧠", Flipped)),
    mirror("mirror-pl-2", "Friends describe you as...", PULSE_LORE, lean("The one who knows", "🦉", Flipped), lean("The one who goes", "🏁", AsIs)),
    mirror("mirror-pl-3", "New hobby approach", PULSE_LORE, lean("Dive in and figure it out", "🤿", AsIs), lean("Read the manual first", "📘", Flipped)),
    mirror("mirror-pl-4", "Travel memory", PULSE_LORE, lean("The legend behind the place", "🐉", Flipped), lean("The rush of getting there", "✈️", AsIs)),
    mirror("mirror-pl-5", "Your motto", PULSE_LORE, lean("Try everything", "🎯", AsIs), lean("Question everything", "❓", Flipped)),
    // glow / cozy
    mirror("mirror-gc-1", "Which comes first?", GLOW_COZY, lean("How it looks", "🌈", AsIs), lean("How it feels", "🧸", Flipped)),
    mirror("mirror-gc-2", "Your room is...", GLOW_COZY, lean("Lived-in and warm", "🪵", Flipped), lean("Curated and pretty", "🪞", AsIs)),
    mirror("mirror-gc-3", "Friends describe you as...", GLOW_COZY, lean("Effortlessly stylish", "👗", AsIs), lean("A warm hug", "🫂", Flipped)),
    mirror("mirror-gc-4", "Sweater priority", GLOW_COZY, lean("Softness first", "🐑", Flipped), lean("Color first", "🎀", AsIs)),
    mirror("mirror-gc-5", "Your motto", GLOW_COZY, lean("Make it beautiful", "🌺", AsIs), lean("Make it comfy", "🛋️", Flipped)),
    // glow / lore
    mirror("mirror-gl-1", "Which comes first?", GLOW_LORE, lean("The beauty", "💎", AsIs), lean("The meaning", "🗝️", Flipped)),
    mirror("mirror-gl-2", "Friends describe you as...", GLOW_LORE, lean("Wise beyond your years", "📿", Flipped), lean("Always glowing", "🌟", AsIs)),
    mirror("mirror-gl-3", "Favorite kind of film", GLOW_LORE, lean("Stunning cinematography", "🎬", AsIs), lean("A twisty plot", "🌀", Flipped)),
    mirror("mirror-gl-4", "At a museum you linger at...", GLOW_LORE, lean("The placard", "🏷️", Flipped), lean("The painting", "🖌️", AsIs)),
    mirror("mirror-gl-5", "Your motto", GLOW_LORE, lean("Shine on", "🌙", AsIs), lean("Stay curious", "🔎", Flipped)),
    // cozy / lore
    mirror("mirror-cl-1", "Which comes first?", COZY_LORE, lean("The comfort", "🧣", AsIs), lean("The curiosity", "🐈", Flipped)),
    mirror("mirror-cl-2", "Friends describe you as...", COZY_LORE, lean("A walking encyclopedia", "📖", Flipped), lean("Everyone's home base", "🏘️", AsIs)),
    mirror("mirror-cl-3", "Rainy afternoon", COZY_LORE, lean("Nap under the blanket", "💤", AsIs), lean("Start a research project", "🔬", Flipped)),
    mirror("mirror-cl-4", "Best bookshelf", COZY_LORE, lean("Organized by subject", "🗂️", Flipped), lean("Next to the armchair", "🪑", AsIs)),
    mirror("mirror-cl-5", "Your motto", COZY_LORE, lean("Home is a feeling", "💛", AsIs), lean("Knowledge is a journey", "🧭", Flipped)),
];
