//! Static reading-plan tables and translation texts.
//!
//! Plans are sparse 365-day tables: consecutive chapters at the start,
//! then waypoint entries. Translation tables carry sample verse texts
//! keyed by exact reference.

use crate::domain::value_objects::{BibleVersion, Passage, ReadingPlan};

pub(crate) struct PlanDay {
    pub day: u32,
    pub book: &'static str,
    pub chapter: u32,
    pub verse_start: u32,
    pub verse_end: u32,
}

impl PlanDay {
    pub fn passage(&self) -> Passage {
        Passage::new(self.book, self.chapter, self.verse_start, self.verse_end)
    }
}

const fn day(
    day: u32,
    book: &'static str,
    chapter: u32,
    verse_start: u32,
    verse_end: u32,
) -> PlanDay {
    PlanDay {
        day,
        book,
        chapter,
        verse_start,
        verse_end,
    }
}

/// Chronological plan: Genesis onward in event order
const CRONOLOGICO: &[PlanDay] = &[
    day(1, "Gênesis", 1, 1, 31),
    day(2, "Gênesis", 2, 1, 25),
    day(3, "Gênesis", 3, 1, 24),
    day(4, "Gênesis", 4, 1, 26),
    day(5, "Gênesis", 5, 1, 32),
    day(6, "Gênesis", 6, 1, 22),
    day(7, "Gênesis", 7, 1, 24),
    day(8, "Gênesis", 8, 1, 22),
    day(9, "Gênesis", 9, 1, 29),
    day(10, "Gênesis", 10, 1, 32),
    day(11, "Gênesis", 11, 1, 32),
    day(12, "Gênesis", 12, 1, 20),
    day(13, "Gênesis", 13, 1, 18),
    day(14, "Gênesis", 14, 1, 24),
    day(15, "Gênesis", 15, 1, 21),
    day(16, "Gênesis", 16, 1, 16),
    day(17, "Gênesis", 17, 1, 27),
    day(18, "Gênesis", 18, 1, 33),
    day(19, "Gênesis", 19, 1, 38),
    day(20, "Gênesis", 20, 1, 18),
    day(21, "Gênesis", 21, 1, 34),
    day(22, "Gênesis", 22, 1, 24),
    day(23, "Gênesis", 23, 1, 20),
    day(24, "Gênesis", 24, 1, 67),
    day(25, "Gênesis", 25, 1, 34),
    day(30, "Gênesis", 30, 1, 43),
    day(50, "Êxodo", 1, 1, 22),
    day(100, "Levítico", 1, 1, 17),
    day(150, "Números", 1, 1, 54),
    day(200, "Deuteronômio", 1, 1, 46),
    day(250, "1 Samuel", 1, 1, 28),
    day(300, "Salmos", 1, 1, 6),
    day(350, "Mateus", 1, 1, 25),
    day(365, "Apocalipse", 22, 1, 21),
];

/// Book-order plan: New Testament first
const LIVROS: &[PlanDay] = &[
    day(1, "Mateus", 1, 1, 25),
    day(2, "Mateus", 2, 1, 23),
    day(3, "Mateus", 3, 1, 17),
    day(4, "Mateus", 4, 1, 25),
    day(5, "Mateus", 5, 1, 48),
    day(30, "João", 1, 1, 51),
    day(100, "Romanos", 1, 1, 32),
    day(200, "Salmos", 1, 1, 6),
    day(300, "Gênesis", 1, 1, 31),
    day(365, "Malaquias", 4, 1, 6),
];

const ARC_VERSES: &[(&str, &str)] = &[
    (
        "João 3:16",
        "Porque Deus amou o mundo de tal maneira que deu o seu Filho unigênito, para que todo aquele que nele crê não pereça, mas tenha a vida eterna.",
    ),
    ("Salmos 23:1", "O Senhor é o meu pastor; nada me faltará."),
    (
        "Romanos 8:28",
        "E sabemos que todas as coisas contribuem juntamente para o bem daqueles que amam a Deus, daqueles que são chamados segundo o seu propósito.",
    ),
    (
        "Filipenses 4:13",
        "Posso todas as coisas em Cristo que me fortalece.",
    ),
    (
        "Jeremias 29:11",
        "Porque eu bem sei os pensamentos que tenho a vosso respeito, diz o Senhor; pensamentos de paz, e não de mal, para vos dar o fim que esperais.",
    ),
];

const NVI_VERSES: &[(&str, &str)] = &[
    (
        "João 3:16",
        "Porque Deus tanto amou o mundo que deu o seu Filho Unigênito, para que todo o que nele crer não pereça, mas tenha a vida eterna.",
    ),
    ("Salmos 23:1", "O Senhor é o meu pastor; nada me faltará."),
    (
        "Romanos 8:28",
        "Sabemos que Deus age em todas as coisas para o bem daqueles que o amam, dos que foram chamados de acordo com o seu propósito.",
    ),
    ("Filipenses 4:13", "Tudo posso naquele que me fortalece."),
    (
        "Jeremias 29:11",
        "Porque eu bem sei os planos que tenho para vocês', diz o Senhor, 'planos de fazê-los prosperar e não de causar dano, planos de dar a vocês esperança e um futuro.",
    ),
];

const ACF_VERSES: &[(&str, &str)] = &[
    (
        "João 3:16",
        "Porque Deus amou o mundo de tal maneira que deu o seu Filho unigênito, para que todo aquele que nele crê não pereça, mas tenha a vida eterna.",
    ),
    ("Salmos 23:1", "O SENHOR é o meu pastor, nada me faltará."),
    (
        "Romanos 8:28",
        "E sabemos que todas as coisas contribuem juntamente para o bem daqueles que amam a Deus, daqueles que são chamados por seu decreto.",
    ),
    (
        "Filipenses 4:13",
        "Posso todas as coisas em Cristo que me fortalece.",
    ),
    (
        "Jeremias 29:11",
        "Porque eu bem sei os pensamentos que tenho a vosso respeito, diz o SENHOR; pensamentos de paz e não de mal, para vos dar o fim que esperais.",
    ),
];

pub(crate) fn plan_table(plan: ReadingPlan) -> &'static [PlanDay] {
    match plan {
        ReadingPlan::Cronologico => CRONOLOGICO,
        ReadingPlan::Livros => LIVROS,
    }
}

/// Last mapped entry of a plan (tables are non-empty constants)
pub(crate) fn final_entry(plan: ReadingPlan) -> &'static PlanDay {
    match plan {
        ReadingPlan::Cronologico => &CRONOLOGICO[CRONOLOGICO.len() - 1],
        ReadingPlan::Livros => &LIVROS[LIVROS.len() - 1],
    }
}

pub(crate) fn verse_table(version: BibleVersion) -> &'static [(&'static str, &'static str)] {
    match version {
        BibleVersion::Arc => ARC_VERSES,
        BibleVersion::Nvi => NVI_VERSES,
        BibleVersion::Acf => ACF_VERSES,
    }
}
