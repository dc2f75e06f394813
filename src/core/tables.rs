//! # Reference Tables
//!
//! Fixed, ordered reference data: the nine planet slots, the twelve rashis,
//! the twenty-seven nakshatras and the eight choghadiya periods.
//!
//! Every table is an enum plus an `ALL_*` array. Position in the array is the
//! index used by the engine, so the order here is load-bearing.

use serde::Serialize;

pub const PLANET_COUNT: usize = 9;
pub const RASHI_COUNT: usize = 12;
pub const NAKSHATRA_COUNT: usize = 27;
pub const CHOGHADIYA_COUNT: usize = 8;

// ============================================================================
// Planets
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// Slot order. `compute_angles` output is aligned with this array.
pub const ALL_PLANETS: [Planet; PLANET_COUNT] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
];

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Sun => "सूर्य",
            Self::Moon => "चंद्र",
            Self::Mercury => "बुध",
            Self::Venus => "शुक्र",
            Self::Mars => "मंगल",
            Self::Jupiter => "गुरु",
            Self::Saturn => "शनि",
            Self::Uranus => "अरुण",
            Self::Neptune => "वरुण",
        }
    }

    /// Astronomical glyph shown next to the name on the chart.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Sun => "☉",
            Self::Moon => "☽",
            Self::Mercury => "☿",
            Self::Venus => "♀",
            Self::Mars => "♂",
            Self::Jupiter => "♃",
            Self::Saturn => "♄",
            Self::Uranus => "♅",
            Self::Neptune => "♆",
        }
    }

    /// Slot position in [`ALL_PLANETS`].
    pub const fn slot(self) -> usize {
        self as usize
    }
}

// ============================================================================
// Rashis
// ============================================================================

/// The 12 rashis (zodiac signs), 30 degrees each, starting from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

pub const ALL_RASHIS: [Rashi; RASHI_COUNT] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Mesha => "मेष",
            Self::Vrishabha => "वृषभ",
            Self::Mithuna => "मिथुन",
            Self::Karka => "कर्क",
            Self::Simha => "सिंह",
            Self::Kanya => "कन्या",
            Self::Tula => "तुला",
            Self::Vrischika => "वृश्चिक",
            Self::Dhanu => "धनु",
            Self::Makara => "मकर",
            Self::Kumbha => "कुंभ",
            Self::Meena => "मीन",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Mesha => "♈",
            Self::Vrishabha => "♉",
            Self::Mithuna => "♊",
            Self::Karka => "♋",
            Self::Simha => "♌",
            Self::Kanya => "♍",
            Self::Tula => "♎",
            Self::Vrischika => "♏",
            Self::Dhanu => "♐",
            Self::Makara => "♑",
            Self::Kumbha => "♒",
            Self::Meena => "♓",
        }
    }

    /// Looks up a rashi by any integer index, wrapping modulo 12.
    pub fn from_index(index: i64) -> Self {
        ALL_RASHIS[index.rem_euclid(RASHI_COUNT as i64) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

// ============================================================================
// Nakshatras
// ============================================================================

/// The 27 nakshatras from Ashwini to Revati, 13°20' each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

pub const ALL_NAKSHATRAS: [Nakshatra; NAKSHATRA_COUNT] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Ashwini => "अश्विनी",
            Self::Bharani => "भरणी",
            Self::Krittika => "कृत्तिका",
            Self::Rohini => "रोहिणी",
            Self::Mrigashira => "मृगशिरा",
            Self::Ardra => "आर्द्रा",
            Self::Punarvasu => "पुनर्वसु",
            Self::Pushya => "पुष्य",
            Self::Ashlesha => "आश्लेषा",
            Self::Magha => "मघा",
            Self::PurvaPhalguni => "पूर्व फाल्गुनी",
            Self::UttaraPhalguni => "उत्तर फाल्गुनी",
            Self::Hasta => "हस्त",
            Self::Chitra => "चित्रा",
            Self::Swati => "स्वाती",
            Self::Vishakha => "विशाखा",
            Self::Anuradha => "अनुराधा",
            Self::Jyeshtha => "ज्येष्ठा",
            Self::Mula => "मूल",
            Self::PurvaAshadha => "पूर्वाषाढा",
            Self::UttaraAshadha => "उत्तराषाढा",
            Self::Shravana => "श्रवण",
            Self::Dhanishtha => "धनिष्ठा",
            Self::Shatabhisha => "शतभिषा",
            Self::PurvaBhadrapada => "पूर्व भाद्रपद",
            Self::UttaraBhadrapada => "उत्तर भाद्रपद",
            Self::Revati => "रेवती",
        }
    }

    /// Looks up a nakshatra by any integer index, wrapping modulo 27.
    pub fn from_index(index: i64) -> Self {
        ALL_NAKSHATRAS[index.rem_euclid(NAKSHATRA_COUNT as i64) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }
}

// ============================================================================
// Choghadiya
// ============================================================================

/// Length of every choghadiya period, in minutes.
pub const CHOGHADIYA_MINUTES: u32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Choghadiya {
    Udveg,
    Char,
    Labh,
    Amrit,
    Kaal,
    Shubh,
    Rog,
    Mrityu,
}

/// Cyclic period order, shared by the day and night halves.
pub const ALL_CHOGHADIYA: [Choghadiya; CHOGHADIYA_COUNT] = [
    Choghadiya::Udveg,
    Choghadiya::Char,
    Choghadiya::Labh,
    Choghadiya::Amrit,
    Choghadiya::Kaal,
    Choghadiya::Shubh,
    Choghadiya::Rog,
    Choghadiya::Mrityu,
];

impl Choghadiya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udveg => "Udveg",
            Self::Char => "Char",
            Self::Labh => "Labh",
            Self::Amrit => "Amrit",
            Self::Kaal => "Kaal",
            Self::Shubh => "Shubh",
            Self::Rog => "Rog",
            Self::Mrityu => "Mrityu",
        }
    }

    pub const fn hindi_name(self) -> &'static str {
        match self {
            Self::Udveg => "उद्वेग",
            Self::Char => "चल",
            Self::Labh => "लाभ",
            Self::Amrit => "अमृत",
            Self::Kaal => "काल",
            Self::Shubh => "शुभ",
            Self::Rog => "रोग",
            Self::Mrityu => "मृत्यु",
        }
    }

    pub const fn is_auspicious(self) -> bool {
        matches!(self, Self::Char | Self::Labh | Self::Amrit | Self::Shubh)
    }

    /// Looks up a period by any integer index, wrapping modulo 8.
    pub fn from_index(index: i64) -> Self {
        ALL_CHOGHADIYA[index.rem_euclid(CHOGHADIYA_COUNT as i64) as usize]
    }
}
