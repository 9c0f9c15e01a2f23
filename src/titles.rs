use std::collections::HashMap;

pub const BOOK_TITLE: &str = "The Complete Sherlock Holmes";
pub const BOOK_AUTHOR: &str = "Arthur Conan Doyle";

pub(crate) const CANON_TITLES: &[(&str, &str)] = &[
    ("A STUDY IN SCARLET", "A Study in Scarlet"),
    ("THE SIGN OF THE FOUR", "The Sign of Four"),
    ("A SCANDAL IN BOHEMIA", "A Scandal in Bohemia"),
    ("THE RED-HEADED LEAGUE", "The Red-Headed League"),
    ("A CASE OF IDENTITY", "A Case of Identity"),
    ("THE BOSCOMBE VALLEY MYSTERY", "The Boscombe Valley Mystery"),
    ("THE FIVE ORANGE PIPS", "The Five Orange Pips"),
    ("THE MAN WITH THE TWISTED LIP", "The Man with the Twisted Lip"),
    ("THE ADVENTURE OF THE BLUE CARBUNCLE", "The Adventure of the Blue Carbuncle"),
    ("THE ADVENTURE OF THE SPECKLED BAND", "The Adventure of the Speckled Band"),
    ("THE ADVENTURE OF THE ENGINEER'S THUMB", "The Adventure of the Engineer's Thumb"),
    ("THE ADVENTURE OF THE NOBLE BACHELOR", "The Adventure of the Noble Bachelor"),
    ("THE ADVENTURE OF THE BERYL CORONET", "The Adventure of the Beryl Coronet"),
    ("THE ADVENTURE OF THE COPPER BEECHES", "The Adventure of the Copper Beeches"),
    ("SILVER BLAZE", "Silver Blaze"),
    ("THE YELLOW FACE", "The Yellow Face"),
    ("THE STOCK-BROKER'S CLERK", "The Stock-Broker's Clerk"),
    ("THE \"GLORIA SCOTT\"", "The Gloria Scott"),
    ("THE MUSGRAVE RITUAL", "The Musgrave Ritual"),
    ("THE REIGATE SQUIRES", "The Reigate Squires"),
    ("THE CROOKED MAN", "The Crooked Man"),
    ("THE RESIDENT PATIENT", "The Resident Patient"),
    ("THE GREEK INTERPRETER", "The Greek Interpreter"),
    ("THE NAVAL TREATY", "The Naval Treaty"),
    ("THE FINAL PROBLEM", "The Final Problem"),
    ("THE ADVENTURE OF THE EMPTY HOUSE", "The Adventure of the Empty House"),
    ("THE ADVENTURE OF THE NORWOOD BUILDER", "The Adventure of the Norwood Builder"),
    ("THE ADVENTURE OF THE DANCING MEN", "The Adventure of the Dancing Men"),
    ("THE ADVENTURE OF THE SOLITARY CYCLIST", "The Adventure of the Solitary Cyclist"),
    ("THE ADVENTURE OF THE PRIORY SCHOOL", "The Adventure of the Priory School"),
    ("THE ADVENTURE OF BLACK PETER", "The Adventure of Black Peter"),
    ("THE ADVENTURE OF CHARLES AUGUSTUS MILVERTON", "The Adventure of Charles Augustus Milverton"),
    ("THE ADVENTURE OF THE SIX NAPOLEONS", "The Adventure of the Six Napoleons"),
    ("THE ADVENTURE OF THE THREE STUDENTS", "The Adventure of the Three Students"),
    ("THE ADVENTURE OF THE GOLDEN PINCE-NEZ", "The Adventure of the Golden Pince-Nez"),
    ("THE ADVENTURE OF THE MISSING THREE-QUARTER", "The Adventure of the Missing Three-Quarter"),
    ("THE ADVENTURE OF THE ABBEY GRANGE", "The Adventure of the Abbey Grange"),
    ("THE ADVENTURE OF THE SECOND STAIN", "The Adventure of the Second Stain"),
    ("THE HOUND OF THE BASKERVILLES", "The Hound of the Baskervilles"),
    ("THE VALLEY OF FEAR", "The Valley of Fear"),
    ("THE ADVENTURE OF WISTERIA LODGE", "The Adventure of Wisteria Lodge"),
    ("THE ADVENTURE OF THE CARDBOARD BOX", "The Adventure of the Cardboard Box"),
    ("THE ADVENTURE OF THE RED CIRCLE", "The Adventure of the Red Circle"),
    ("THE ADVENTURE OF THE BRUCE-PARTINGTON PLANS", "The Adventure of the Bruce-Partington Plans"),
    ("THE ADVENTURE OF THE DYING DETECTIVE", "The Adventure of the Dying Detective"),
    ("THE DISAPPEARANCE OF LADY FRANCES CARFAX", "The Disappearance of Lady Frances Carfax"),
    ("THE ADVENTURE OF THE DEVIL'S FOOT", "The Adventure of the Devil's Foot"),
    ("HIS LAST BOW", "His Last Bow"),
];

#[derive(Debug, Clone)]
pub struct TitleMap {
    entries: Vec<(&'static str, &'static str)>,
    index: HashMap<&'static str, &'static str>,
}

impl TitleMap {
    pub fn canon() -> Self {
        Self::from_entries(CANON_TITLES)
    }

    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        let mut ordered = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());
        for &(key, display) in entries {
            if !index.contains_key(key) {
                index.insert(key, display);
                ordered.push((key, display));
            }
        }

        Self {
            entries: ordered,
            index,
        }
    }

    pub fn display_title(&self, line: &str) -> Option<&'static str> {
        self.index.get(line).copied()
    }

    pub fn display_titles(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(_, display)| *display)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canon_table_has_unique_keys() {
        assert_eq!(TitleMap::canon().len(), CANON_TITLES.len());
        assert_eq!(CANON_TITLES.len(), 48);
    }

    #[test]
    fn display_title_requires_exact_match() {
        let titles = TitleMap::canon();
        assert_eq!(titles.display_title("SILVER BLAZE"), Some("Silver Blaze"));
        assert_eq!(
            titles.display_title("THE \"GLORIA SCOTT\""),
            Some("The Gloria Scott")
        );
        assert_eq!(titles.display_title("Silver Blaze"), None);
        assert_eq!(titles.display_title("SILVER BLAZE AGAIN"), None);
        assert_eq!(titles.display_title("THE \u{201c}GLORIA SCOTT\u{201d}"), None);
    }

    #[test]
    fn from_entries_keeps_first_occurrence_order() {
        let titles = TitleMap::from_entries(&[("B", "Bee"), ("A", "Ay"), ("B", "Bee again")]);
        assert_eq!(titles.len(), 2);
        assert_eq!(titles.display_title("B"), Some("Bee"));
        assert_eq!(titles.display_titles().collect::<Vec<_>>(), vec!["Bee", "Ay"]);
    }
}
