//! The 22 Major Arcana records.

use super::Card;

pub(crate) static MAJOR_ARCANA: [Card; 22] = [
    Card {
        name: "The Fool",
        archetype: "The New Initiate",
        gnostic: "The Divine Spark falling into matter. The beginning of the Sophia mythos. Pure potential entering the Kenoma.",
        keywords: &["Beginnings", "Innocence", "Leap of Faith", "Originality", "Spontaneity"],
        advice: "Step into the void. The fall is necessary for the ascent.",
    },
    Card {
        name: "The Magician",
        archetype: "The Operator",
        gnostic: "The Demiurge. The shaper of the material illusion who mistakes himself for the Creator.",
        keywords: &["Manifestation", "Resourcefulness", "Power", "Inspired Action"],
        advice: "You have the power to shape this reality, but do not mistake it for the Truth.",
    },
    Card {
        name: "The High Priestess",
        archetype: "The Encrypted Log",
        gnostic: "Sophia (Wisdom). The hidden light trapped in the darkness. The silence that holds the memory of the Pleroma.",
        keywords: &["Intuition", "Sacred Knowledge", "Divine Feminine", "The Subconscious"],
        advice: "Look beyond the veil. The silence holds the memory of your true home.",
    },
    Card {
        name: "The Empress",
        archetype: "The Motherboard",
        gnostic: "Barbelo. The first emanation. The womb of all spirit and the infinite bandwidth of creation.",
        keywords: &["Femininity", "Beauty", "Nature", "Nurturing", "Abundance"],
        advice: "Nurture the spirit within. Creation is an act of remembrance.",
    },
    Card {
        name: "The Emperor",
        archetype: "The Firewall",
        gnostic: "The Archon. The ruler of material laws and limitations. Structure that can become a prison.",
        keywords: &["Authority", "Establishment", "Structure", "Father Figure"],
        advice: "Order is useful, but do not let the structure become your cage.",
    },
    Card {
        name: "The Hierophant",
        archetype: "The Legacy Code",
        gnostic: "The Orthodox. The outer church that guards the gate but does not enter. Tradition as a barrier to Gnosis.",
        keywords: &["Spiritual Wisdom", "Religious Beliefs", "Conformity", "Tradition"],
        advice: "Learn the tradition, then transcend it. The true temple is within.",
    },
    Card {
        name: "The Lovers",
        archetype: "The Binary Pair",
        gnostic: "The Syzygy. The divine pairing of aeons. The reconciliation of opposites in the bridal chamber.",
        keywords: &["Love", "Harmony", "Relationships", "Values Alignment", "Choices"],
        advice: "Seek unity in division. The other is a mirror of your own light.",
    },
    Card {
        name: "The Chariot",
        archetype: "The Drive",
        gnostic: "The Ascent. The soul's vehicle rising through the spheres. Triumph over the lower elements.",
        keywords: &["Control", "Willpower", "Success", "Action", "Determination"],
        advice: "Harness the opposing forces. Your will must be singular to pierce the firmament.",
    },
    Card {
        name: "Strength",
        archetype: "The Stable Core",
        gnostic: "Pneumatic Power. The spirit overcoming the animal soul (Hylic). Endurance through inner fire.",
        keywords: &["Strength", "Courage", "Persuasion", "Influence", "Compassion"],
        advice: "True power is quiet. Tame the beast with understanding, not force.",
    },
    Card {
        name: "The Hermit",
        archetype: "The Offline Mode",
        gnostic: "The Gnostic Seeker. The one who carries the spark of light in the darkness of the world.",
        keywords: &["Soul-searching", "Introspection", "Being Alone", "Inner Guidance"],
        advice: "Withdraw from the noise. The truth is hidden in your own silence.",
    },
    Card {
        name: "Wheel of Fortune",
        archetype: "The RNG",
        gnostic: "Heimarmene (Fate). The crushing wheel of the zodiac and planetary influences that bind the soul.",
        keywords: &["Good Luck", "Karma", "Life Cycles", "Destiny", "A Turning Point"],
        advice: "The stars dictate the flesh, not the spirit. Rise above the cycle.",
    },
    Card {
        name: "Justice",
        archetype: "The Audit",
        gnostic: "Ma'at. The law of cause and effect in the Kenoma. The inevitable balancing of the equation.",
        keywords: &["Justice", "Fairness", "Truth", "Cause and Effect", "Law"],
        advice: "Weigh your actions. What you put into the illusion returns to you.",
    },
    Card {
        name: "The Hanged Man",
        archetype: "The Glitch",
        gnostic: "The Sacrifice. Suspending the ego to perceive the divine inversion. Seeing the world as upside down.",
        keywords: &["Pause", "Surrender", "Letting Go", "New Perspectives"],
        advice: "Let go of the world's logic. To gain the light, you must lose the self.",
    },
    Card {
        name: "Death",
        archetype: "The Terminator",
        gnostic: "Liberation. The shedding of the material shell. The release of the spark from the prison of form.",
        keywords: &["Endings", "Change", "Transformation", "Transition"],
        advice: "Do not fear the end. It is the breaking of the chain.",
    },
    Card {
        name: "Temperance",
        archetype: "The Mixer",
        gnostic: "Alchemy. The blending of fire and water. The middle path back to the center.",
        keywords: &["Balance", "Moderation", "Patience", "Purpose"],
        advice: "Mix the volatile with the fixed. Patience is the key to transmutation.",
    },
    Card {
        name: "The Devil",
        archetype: "The Malware",
        gnostic: "The Archons' Grip. Attachment to matter. The illusion of separation and the addiction to form.",
        keywords: &["Shadow Self", "Attachment", "Addiction", "Restriction", "Sexuality"],
        advice: "Recognize the chains are of your own making. Wake up from the dream of matter.",
    },
    Card {
        name: "The Tower",
        archetype: "The Crash",
        gnostic: "The Destruction of the Temple. The shattering of false reality and ego structures.",
        keywords: &["Sudden Change", "Upheaval", "Chaos", "Revelation", "Awakening"],
        advice: "Let the false self collapse. Only what is real will remain.",
    },
    Card {
        name: "The Star",
        archetype: "The Beacon",
        gnostic: "The Pleroma. The distant light of the fullness. Hope from beyond the spheres.",
        keywords: &["Hope", "Faith", "Purpose", "Renewal", "Spirituality"],
        advice: "Follow the distant light. It is the memory of your true home.",
    },
    Card {
        name: "The Moon",
        archetype: "The Deepfake",
        gnostic: "The Archontic Deception. The false light. Confusion in the astral realm.",
        keywords: &["Illusion", "Fear", "Anxiety", "Subconscious", "Intuition"],
        advice: "Trust your intuition, not your eyes. The shadows are tricks of the mind.",
    },
    Card {
        name: "The Sun",
        archetype: "The Render",
        gnostic: "The Logos. The Christos. The illuminating truth that burns away shadow.",
        keywords: &["Positivity", "Fun", "Warmth", "Success", "Vitality"],
        advice: "Shine without hesitation. The light reveals all things as they are.",
    },
    Card {
        name: "Judgement",
        archetype: "The Wake-Up Call",
        gnostic: "The Call. The awakening of the spark from its slumber. The resurrection of the spirit.",
        keywords: &["Judgement", "Rebirth", "Inner Calling", "Absolution"],
        advice: "The trumpet sounds for you. Rise from the grave of ignorance.",
    },
    Card {
        name: "The World",
        archetype: "The Full Stack",
        gnostic: "The Restoration. The return of the spark to the Pleroma. Wholeness and completion.",
        keywords: &["Completion", "Integration", "Accomplishment", "Travel"],
        advice: "The journey is a circle. You have returned to the beginning, but with knowledge.",
    },
];
