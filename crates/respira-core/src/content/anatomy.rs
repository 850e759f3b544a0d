//! Static anatomy reference content.
//!
//! Read-only store mapping a part identifier to its descriptive text.
//! A missing identifier is a miss (`None`), never an error; callers fall
//! back to a placeholder.

use serde::{Deserialize, Serialize};

/// Descriptive text for one anatomical part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnatomyInfo {
    pub title: String,
    pub description: String,
    pub fun_fact: String,
    pub functions: Vec<String>,
    pub medical_note: String,
}

/// The read-only anatomy content store.
#[derive(Debug, Clone)]
pub struct AnatomyAtlas {
    parts: Vec<(&'static str, AnatomyInfo)>,
}

impl AnatomyAtlas {
    /// Atlas with the built-in respiratory-system parts.
    pub fn respiratory() -> Self {
        Self {
            parts: builtin_parts(),
        }
    }

    /// Lookup by part identifier. Absence is a miss, not an error.
    pub fn get(&self, part: &str) -> Option<&AnatomyInfo> {
        let wanted = part.to_ascii_lowercase();
        self.parts
            .iter()
            .find(|(id, _)| *id == wanted)
            .map(|(_, info)| info)
    }

    /// All known part identifiers, in anatomical order (airway down).
    pub fn part_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parts.iter().map(|(id, _)| *id)
    }

    /// Case-insensitive keyword search over titles, descriptions and
    /// function lists.
    pub fn search(&self, keyword: &str) -> Vec<(&'static str, &AnatomyInfo)> {
        let needle = keyword.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.parts
            .iter()
            .filter(|(_, info)| {
                info.title.to_lowercase().contains(&needle)
                    || info.description.to_lowercase().contains(&needle)
                    || info
                        .functions
                        .iter()
                        .any(|f| f.to_lowercase().contains(&needle))
            })
            .map(|(id, info)| (*id, info))
            .collect()
    }
}

impl Default for AnatomyAtlas {
    fn default() -> Self {
        Self::respiratory()
    }
}

fn part(
    id: &'static str,
    title: &str,
    description: &str,
    fun_fact: &str,
    functions: [&str; 4],
    medical_note: &str,
) -> (&'static str, AnatomyInfo) {
    (
        id,
        AnatomyInfo {
            title: title.to_string(),
            description: description.to_string(),
            fun_fact: fun_fact.to_string(),
            functions: functions.iter().map(|f| f.to_string()).collect(),
            medical_note: medical_note.to_string(),
        },
    )
}

fn builtin_parts() -> Vec<(&'static str, AnatomyInfo)> {
    vec![
        part(
            "nose",
            "Nose",
            "The nose is the primary entrance for air into the respiratory system. \
             The hairs inside the nose help filter out large particles from the air \
             we breathe. The nasal cavity also warms and humidifies incoming air.",
            "Your nose can remember 50,000 different scents!",
            [
                "Filters particles from incoming air",
                "Warms and humidifies air",
                "Houses olfactory receptors for smell",
                "Produces mucus to trap pathogens",
            ],
            "Blocked nasal passages can reduce oxygen intake and affect sleep quality.",
        ),
        part(
            "pharynx",
            "Pharynx (Throat)",
            "The pharynx is a muscular tube that serves as a passageway for both air \
             and food. It connects the nasal cavity and mouth to the larynx and \
             esophagus. This shared pathway requires careful coordination during \
             swallowing.",
            "The pharynx plays a role in both respiration and digestion, making it a \
             critical crossroads in your body.",
            [
                "Conducts air from nose/mouth to larynx",
                "Provides pathway for food to esophagus",
                "Houses tonsils for immune defense",
                "Assists in speech production",
            ],
            "Pharyngeal infections can affect both breathing and swallowing.",
        ),
        part(
            "larynx",
            "Larynx (Voice Box)",
            "The larynx contains the vocal cords and is responsible for sound \
             production. It also prevents food from entering the lower respiratory \
             tract through the epiglottis mechanism.",
            "Men typically have larger larynxes, which is why they usually have \
             deeper voices.",
            [
                "Houses vocal cords for speech",
                "Prevents aspiration during swallowing",
                "Regulates airflow to lungs",
                "Protects lower airways",
            ],
            "Laryngeal swelling can cause breathing difficulties and voice changes.",
        ),
        part(
            "trachea",
            "Trachea (Windpipe)",
            "The trachea is a tube about 4-5 inches long and 1 inch in diameter that \
             carries air to the bronchi. It's reinforced with C-shaped cartilage \
             rings to keep it open and prevent collapse during breathing.",
            "The trachea can expand up to 3 times its normal size when you take a \
             deep breath!",
            [
                "Conducts air between larynx and bronchi",
                "Maintains open airway with cartilage support",
                "Filters and cleans incoming air",
                "Produces mucus to trap particles",
            ],
            "Tracheal obstruction is a medical emergency requiring immediate \
             intervention.",
        ),
        part(
            "bronchi",
            "Bronchi",
            "The bronchi are the two main branches of the trachea that lead to the \
             lungs. They further divide into smaller bronchioles, creating a \
             tree-like structure that distributes air throughout the lungs.",
            "The right bronchus is wider, shorter, and more vertical than the left, \
             which is why foreign objects are more likely to enter the right lung.",
            [
                "Distribute air to different lung regions",
                "Filter and warm incoming air",
                "Produce mucus for particle trapping",
                "Provide structural support to lungs",
            ],
            "Bronchial inflammation (bronchitis) can cause persistent coughing and \
             breathing difficulties.",
        ),
        part(
            "bronchioles",
            "Bronchioles",
            "Bronchioles are small airways that branch off from the bronchi and lead \
             to the alveoli. They can constrict or dilate to control airflow and are \
             the site where asthma primarily affects breathing.",
            "There are about 30,000 bronchioles in each lung!",
            [
                "Control airflow to alveoli",
                "Regulate ventilation distribution",
                "Contain smooth muscle for diameter control",
                "Final air conditioning before alveoli",
            ],
            "Bronchiole constriction during asthma attacks can severely limit \
             breathing.",
        ),
        part(
            "lungs",
            "Lungs",
            "The lungs are paired, cone-shaped organs that take up most of the space \
             in the chest. The right lung has 3 lobes while the left has 2 to make \
             room for the heart. They contain millions of alveoli for gas exchange.",
            "If you stretched out all the airways in your lungs, they would cover \
             about 70 square meters - about the size of a tennis court!",
            [
                "Primary site of gas exchange",
                "Filters blood clots and air bubbles",
                "Produces surfactant to reduce surface tension",
                "Helps regulate blood pH",
            ],
            "Lung capacity decreases with age and can be improved with regular \
             exercise.",
        ),
        part(
            "alveoli",
            "Alveoli",
            "Alveoli are tiny air sacs where gas exchange occurs. Oxygen diffuses \
             into the blood while carbon dioxide diffuses out. They are surrounded \
             by capillaries and have extremely thin walls for efficient gas transfer.",
            "There are about 480 million alveoli in adult lungs - that's about the \
             same number as stars in the Milky Way galaxy!",
            [
                "Site of oxygen and carbon dioxide exchange",
                "Provide massive surface area for gas transfer",
                "Produce surfactant to prevent collapse",
                "Interface between respiratory and circulatory systems",
            ],
            "Alveolar damage from smoking or disease can permanently reduce lung \
             function.",
        ),
        part(
            "diaphragm",
            "Diaphragm",
            "The diaphragm is a dome-shaped muscle that separates the chest from the \
             abdomen. Its contraction and relaxation drive the breathing process by \
             changing the volume of the chest cavity.",
            "The diaphragm is the primary muscle used in breathing and accounts for \
             75% of the air movement in normal breathing.",
            [
                "Primary muscle of inspiration",
                "Creates negative pressure for air intake",
                "Separates chest and abdominal cavities",
                "Assists in other functions like coughing",
            ],
            "Diaphragm paralysis can severely impair breathing and may require \
             mechanical ventilation.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atlas_has_nine_parts() {
        let atlas = AnatomyAtlas::respiratory();
        assert_eq!(atlas.part_ids().count(), 9);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let atlas = AnatomyAtlas::respiratory();
        assert_eq!(atlas.get("Larynx").unwrap().title, "Larynx (Voice Box)");
    }

    #[test]
    fn unknown_part_is_a_miss() {
        let atlas = AnatomyAtlas::respiratory();
        assert!(atlas.get("appendix").is_none());
    }

    #[test]
    fn search_matches_titles_descriptions_and_functions() {
        let atlas = AnatomyAtlas::respiratory();

        let by_title = atlas.search("windpipe");
        assert!(by_title.iter().any(|(id, _)| *id == "trachea"));

        let by_function = atlas.search("gas exchange");
        assert!(by_function.iter().any(|(id, _)| *id == "alveoli"));
        assert!(by_function.iter().any(|(id, _)| *id == "lungs"));
    }

    #[test]
    fn empty_search_matches_nothing() {
        let atlas = AnatomyAtlas::respiratory();
        assert!(atlas.search("").is_empty());
    }
}
