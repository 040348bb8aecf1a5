//! The builtin teen drug-screening lexicon.
//!
//! Keyword lists cover symptoms, behaviors, paraphernalia, and street names
//! for each substance. Keywords shared across substances live in the common
//! set and are resolved by the leading-question sequence instead.

use crate::models::{DrugProfile, LeadingQuestion};

use super::Lexicon;

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Build the builtin lexicon. Always passes validation.
pub fn builtin() -> Lexicon {
    let mut marijuana = DrugProfile::new("marijuana", "Marijuana");
    marijuana.keywords = keywords(&[
        "red eyes",
        "bloodshot eyes",
        "slow reaction time",
        "slow reaction",
        "bad problem solving",
        "poor problem solving",
        "difficulty problem solving",
        "lose track of thoughts",
        "bad memory",
        "poor memory",
        "short term memory",
        "extreme hunger",
        "unusual hunger",
        "increased eating",
        "eating more",
        "munchies",
        "silly",
        "giggly",
        "acting slow",
        "lethargic",
        "dazed",
        "confused",
        "420",
        "rolling paper",
        "bong",
        "grinder",
        "dried plant",
        "dried plants",
        "marijuana leaves",
        "devils lettuce",
        "grass",
        "cannabis",
        "blaze",
        "ganja",
        "joint",
        "blunt",
        "hemp",
        "marijuana",
        "weed",
        "pot",
    ]);
    marijuana.advice = concat!(
        "Sounds like your teen is using marijuana. Stay calm: talk with them ",
        "about why they started, lay out the short-term effects on memory and ",
        "motivation, and agree on clear expectations. Keep the conversation ",
        "open rather than punitive so they keep coming to you.",
    )
    .to_string();

    let mut adderall = DrugProfile::new("adderall", "Adderall");
    adderall.keywords = keywords(&[
        "headache",
        "hoarseness",
        "shakiness",
        "tremors",
        "seizures",
        "excitable",
        "aggressive",
        "aggression",
        "adderall",
        "addy",
        "study pills",
    ]);
    adderall.advice = concat!(
        "Sounds like your teen is using Adderall without a prescription. ",
        "Approach this sensitively: stimulant misuse usually traces back to ",
        "pressure around school or sleep. Talk about the stressors first, ",
        "then about the real risks of unprescribed use, and loop in their ",
        "doctor if the pattern continues.",
    )
    .to_string();

    let mut alcohol = DrugProfile::new("alcohol", "Alcohol");
    alcohol.keywords = keywords(&[
        "appetite",
        "shaking",
        "bruises",
        "smell of alcohol",
        "smells of alcohol",
        "arguments",
        "accidents",
        "isolated",
        "irritability",
        "outburst",
        "bottles",
        "bottle",
        "alcohol",
        "booze",
        "drinking",
        "drunk",
        "hungover",
        "hangover",
        "beer",
        "liquor",
        "vodka",
    ]);
    alcohol.advice = concat!(
        "Seems like your teen is drinking. Alcohol is the most common ",
        "substance among teens, so skip the shock and lead with safety: ",
        "nonjudgmental facts about how it affects them, firm rules about ",
        "driving and parties, and a standing offer of a no-questions-asked ",
        "ride home.",
    )
    .to_string();

    let mut tobacco = DrugProfile::new("tobacco", "Tobacco");
    tobacco.keywords = keywords(&[
        "bad breath",
        "breath",
        "teeth",
        "yellow",
        "yellow fingers",
        "stained fingers",
        "wheezing",
        "smoke",
        "smokey",
        "windows",
        "burn",
        "burns",
        "fire",
        "lighter",
        "matches",
        "temper",
        "tobacco",
        "cigarette",
        "cigarettes",
        "nicotine",
        "vape",
        "vaping",
        "juul",
    ]);
    tobacco.advice = concat!(
        "Sounds like your teen is using tobacco or nicotine. Early ",
        "intervention works well here: calmly walk through the short- and ",
        "long-term effects, remove easy access at home, and make clear you ",
        "are a resource rather than a judge if they want help quitting.",
    )
    .to_string();

    let mut cocaine = DrugProfile::new("cocaine", "Cocaine");
    cocaine.keywords = keywords(&[
        "hyper",
        "snort",
        "confidence",
        "talkative",
        "powder",
        "white powder",
        "needle marks",
        "razor",
        "isolation",
        "cocaine",
        "coke",
    ]);
    cocaine.advice = concat!(
        "Seems like your teen may be using cocaine, which is highly ",
        "addictive and dangerous. Talk to them calmly about how long and how ",
        "often they have been using. For frequent use, a treatment program ",
        "is the safest option; local addiction support groups are a good ",
        "alternative if rehab feels out of reach.",
    )
    .to_string();

    let mut hallucinogen = DrugProfile::new("hallucinogen", "Hallucinogens");
    hallucinogen.keywords = keywords(&[
        "tingling fingers",
        "weakness",
        "distress",
        "anxiety",
        "anxious",
        "depression",
        "depressed",
        "convulsions",
        "sweating",
        "chills",
        "vision",
        "hallucinate",
        "hallucinating",
        "hallucinogen",
        "seeing things",
        "lsd",
        "acid",
        "shrooms",
        "tripping",
    ]);
    hallucinogen.advice = concat!(
        "Sounds like your teen is using hallucinogens. These don't build ",
        "chemical cravings the way most drugs do, but habitual use still ",
        "escalates: bigger doses, riskier trips, neglected responsibilities. ",
        "Start with an honest conversation about those dangers; brief ",
        "counseling interventions and family-based approaches like CRAFT are ",
        "both well supported if it goes further.",
    )
    .to_string();

    let mut opioid = DrugProfile::new("opioid", "Opioids");
    opioid.keywords = keywords(&[
        "disoriented",
        "swings",
        "droopy",
        "needles",
        "syringe",
        "spoon",
        "shoelaces",
        "straws",
        "nose",
        "marks",
        "infection",
        "cuts",
        "scabs",
        "picking",
        "hostile",
        "self esteem",
        "long sleeves",
        "sleeves",
        "opioid",
        "opioids",
        "heroin",
        "oxycontin",
        "oxy",
        "fentanyl",
        "painkillers",
    ]);
    opioid.advice = concat!(
        "The signs point at opioids, which is serious. Don't try to handle ",
        "this alone: contact your doctor or an addiction specialist right ",
        "away, keep naloxone at home, and remove any prescription ",
        "painkillers from easy reach while you arrange treatment.",
    )
    .to_string();

    let common_keywords = keywords(&[
        "cough",
        "fast heartbeat",
        "rapid heartbeat",
        "heartrate",
        "heart rate",
        "dry mouth",
        "poor coordination",
        "bad coordination",
        "loss of motivation",
        "losing motivation",
        "no motivation",
        "lack of motivation",
        "no enthusiasm",
        "loss of enthusiasm",
        "lack of enthusiasm",
        "paranoia",
        "paranoid",
        "bag",
        "baggies",
        "small baggies",
        "pipe",
        "pipes",
        "incense",
        "air freshener",
        "cologne",
        "perfume",
        "mouthwash",
        "mints",
        "gum",
        "towel",
        "nausea",
        "nauseous",
        "dizzy",
        "bad hygiene",
        "poor hygiene",
        "bad personal grooming",
        "poor personal grooming",
        "stinky",
        "smelly",
        "smell",
        "slurred speech",
        "slurred",
        "incoherent speech",
        "missing school",
        "grades",
        "trouble",
        "fights",
        "interest",
        "sleep",
        "money",
        "mood",
        "weight",
        "eat",
        "eating",
        "pupils",
        "behavior",
        "withdrawn",
    ]);

    let questions = vec![
        LeadingQuestion::new(
            "Does your teen often have bloodshot eyes, and do they seem to be losing motivation?",
            "marijuana",
        ),
        LeadingQuestion::new(
            "Is your teen being overly talkative and unusually excitable?",
            "adderall",
        ),
        LeadingQuestion::new(
            "Is your teen getting into fights and struggling with everyday tasks?",
            "alcohol",
        ),
        LeadingQuestion::new(
            "Have you noticed your teen coughing or wheezing a lot, or stained yellow fingers?",
            "tobacco",
        ),
        LeadingQuestion::new(
            "Has your teen been getting frequent nosebleeds, or do they often have a runny nose?",
            "cocaine",
        ),
        LeadingQuestion::new(
            "Has your teen been hallucinating or seeing things that aren't there?",
            "hallucinogen",
        ),
        LeadingQuestion::new(
            "Have you noticed any injection marks on your teen?",
            "opioid",
        ),
    ];

    Lexicon {
        profiles: vec![
            marijuana,
            adderall,
            alcohol,
            tobacco,
            cocaine,
            hallucinogen,
            opioid,
        ],
        common_keywords,
        questions,
        greeting: concat!(
            "So, you think your teen may be using drugs? What symptoms are ",
            "they exhibiting? Any changes in behavior?",
        )
        .to_string(),
        clarify_preamble: concat!(
            "Sorry, I'll need a bit more information to determine what your ",
            "teen might be experimenting with.",
        )
        .to_string(),
        wrap_up: concat!(
            "That's all the guidance I have for this conversation. Start a ",
            "new one if something else comes up.",
        )
        .to_string(),
        failure_advice: concat!(
            "I've tried my best, but I still can't tell what's going on. ",
            "Please reach out to a doctor or another health professional for ",
            "help.",
        )
        .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_question_targets_a_distinct_profile() {
        let lexicon = builtin();
        let targets: Vec<&str> = lexicon
            .questions
            .iter()
            .map(|q| q.profile_id.as_str())
            .collect();

        assert_eq!(targets.len(), lexicon.profiles.len());
        for profile in &lexicon.profiles {
            assert!(targets.contains(&profile.id.as_str()));
        }
    }

    #[test]
    fn test_common_keywords_do_not_shadow_profiles() {
        let lexicon = builtin();
        for keyword in &lexicon.common_keywords {
            for profile in &lexicon.profiles {
                assert!(
                    !profile.has_keyword(keyword),
                    "common keyword {:?} also declared on profile {}",
                    keyword,
                    profile.id
                );
            }
        }
    }
}
