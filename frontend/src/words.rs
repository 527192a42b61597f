//! Built-in word lists the lobby offers alongside custom words. Each list is
//! large enough to fill a board on its own.

pub const CUSTOM_SET_NAME: &str = "Custom";

pub const DEFAULT_WORD_SETS: &[(&str, &[&str])] = &[
    ("English (Classic)", CLASSIC),
    ("English (Simple)", SIMPLE),
];

const CLASSIC: &[&str] = &[
    "AFRICA", "AGENT", "ALIEN", "AMAZON", "ANGEL", "ANCHOR", "APPLE", "ARM",
    "BAND", "BANK", "BATTERY", "BEACH", "BEAR", "BELL", "BERLIN", "BOARD",
    "BOND", "BOOM", "BRIDGE", "BUTTON", "CANADA", "CAPITAL", "CARROT",
    "CASINO", "CELL", "CHANGE", "CHARGE", "CHECK", "CHEST", "CHURCH",
    "CIRCLE", "CLIFF", "CLOAK", "CODE", "COMPOUND", "CONCERT", "COPPER",
    "COURT", "CRANE", "CRASH", "CROWN", "CYCLE", "DANCE", "DEGREE",
    "DIAMOND", "DICE", "DRAGON", "DRESS", "DRILL", "DUCK", "EAGLE", "EGYPT",
    "EMBASSY", "ENGINE", "EUROPE", "FAIR", "FALL", "FENCE", "FIGHTER",
    "FIGURE", "FILE", "FILM", "FIRE", "FLUTE", "FOREST", "FRANCE", "GAME",
    "GHOST", "GIANT", "GLASS", "GLOVE", "GOLD", "GRACE", "GREEN", "GROUND",
    "HAWK", "HOLLYWOOD", "HONEY", "HOOD", "HOOK", "HORSE", "HOSPITAL",
    "HOTEL", "ICELAND", "INDIA", "IRON", "IVORY", "JUPITER", "KANGAROO",
    "KETCHUP", "KEY", "KNIGHT", "LASER", "LAWYER", "LEMON", "LIGHT", "LIME",
    "LION", "LOCK", "LONDON", "LUCK", "MAMMOTH", "MAPLE", "MARBLE", "MARCH",
    "MATCH", "MERCURY", "MEXICO", "MICROSCOPE", "MILLIONAIRE", "MINE",
    "MINT", "MISSILE", "MODEL", "MOSCOW", "MOUNT", "MOUSE", "MOUTH", "MUG",
    "NAIL", "NEEDLE", "NET", "NIGHT", "NINJA", "NOTE", "NOVEL", "NURSE",
    "NUT", "OCTOPUS", "OIL", "OLIVE", "OLYMPUS", "OPERA", "ORANGE", "ORGAN",
    "PALM", "PARACHUTE", "PARIS", "PARK", "PASTE", "PENGUIN", "PHOENIX",
    "PIANO", "PILOT", "PIPE", "PIRATE", "PISTOL", "PIT", "PLANE", "PLASTIC",
    "PLATE", "POINT", "POISON", "POLE", "POLICE", "POOL", "PORT", "POST",
    "PRESS", "PRINCESS", "PUMPKIN", "PUPIL", "PYRAMID", "QUEEN", "RABBIT",
    "RACKET", "RAY", "REVOLUTION", "RING", "ROBIN", "ROBOT", "ROCK", "ROME",
    "ROOT", "ROSE", "ROW", "RULER", "SATELLITE", "SATURN", "SCALE",
    "SCHOOL", "SCIENTIST", "SCORPION", "SCREEN", "SCUBA", "SEAL", "SERVER",
    "SHADOW", "SHAKESPEARE", "SHARK", "SHIP", "SHOE", "SHOP", "SHOT",
    "SINK", "SKYSCRAPER", "SLIP", "SLUG", "SMUGGLER", "SNOW", "SNOWMAN",
    "SOCK", "SOLDIER", "SOUL", "SOUND", "SPACE", "SPELL", "SPIDER", "SPIKE",
    "SPINE", "SPOT", "SPRING", "SPY", "SQUARE", "STADIUM", "STAFF", "STAR",
    "STATE", "STICK", "STOCK", "STRAW", "STREAM", "STRIKE", "STRING",
    "SUPERHERO", "SWING", "SWITCH", "TABLE", "TAG", "TAIL", "TAP",
    "TEACHER", "TELESCOPE", "TEMPLE", "THEATER", "THIEF", "THUMB", "TICK",
    "TIE", "TIME", "TOKYO", "TOOTH", "TORCH", "TOWER", "TRACK", "TRAIN",
    "TRIANGLE", "TRIP", "TRUNK", "TUBE", "TURKEY", "UNDERTAKER", "UNICORN",
    "VACUUM", "VAN", "VET", "WAKE", "WALL", "WAR", "WASHER", "WASHINGTON",
    "WATCH", "WATER", "WAVE", "WEB", "WELL", "WHALE", "WHIP", "WIND",
    "WITCH", "WORM", "YARD",
];

const SIMPLE: &[&str] = &[
    "BALL", "BIRD", "BOAT", "BOOK", "BREAD", "CAKE", "CAR", "CAT", "CHAIR",
    "CLOUD", "COW", "CUP", "DOG", "DOOR", "DRUM", "EGG", "FARM", "FISH",
    "FLAG", "FLOWER", "FROG", "HAT", "HOUSE", "KITE", "LAMP", "LEAF",
    "MILK", "MOON", "NEST", "OWL", "PIG", "RAIN", "SHEEP", "SHELL", "SONG",
    "SPOON", "STONE", "SUN", "TENT", "TREE",
];
