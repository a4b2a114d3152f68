use crate::domain::content::{Article, Span, Topic};

pub const PLANTCARE_KNOWLEDGE: Article = Article {
    id: "plantcare-knowledge",
    heading: "Understanding Plant Care: From Roots to Leaves",
    intro: &[
        &[Span::Text("Healthy plant care begins with understanding your plant’s natural habitat. Every species evolved under specific light, temperature, and soil conditions. iLovePlantCare simplifies this complexity by helping you recreate those microenvironments indoors. From tropical humidity levels to arid cactus soils, our guides focus on matching your care habits to what each plant truly needs.")],
        &[Span::Text("Topics include watering schedules, soil aeration, repotting techniques, pest prevention, humidity regulation, and seasonal care adjustments. Each guide is built for beginners yet detailed enough for enthusiasts who want to go deeper.")],
        &[Span::Text("Whether you’re growing a single peace lily or managing a full indoor jungle, the goal is to make plant care relaxing, not stressful. iLovePlantCare encourages observation over perfection, learn to read your plants’ leaves, stems, and soil moisture rather than following rigid rules.")],
    ],
    topics: &[],
    closing: &[],
};

pub const COMPREHENSIVE_PLANT_CARE: Article = Article {
    id: "comprehensive-plant-care",
    heading: "The Complete Guide to Indoor Plant Care and Growth",
    intro: &[&[Span::Text("Caring for indoor plants is both an art and a science. At iLovePlantCare, our goal is to help you understand how plants grow, breathe, and respond to the environments we create for them. Whether you’re raising a low-light peace lily, a sun-loving jade plant, or a humidity-hungry fern, the key to thriving greenery is learning the language of your plants. Leaves, stems, and soil tell you everything you need to know, if you know how to read the signs.")]],
    topics: &[
        Topic {
            heading: "🌿 Understanding the Fundamentals of Plant Health",
            paragraphs: &[
                &[Span::Text("Every indoor plant depends on three environmental foundations: light, moisture, and airflow. Light fuels photosynthesis, water transports nutrients, and airflow prevents mold and stagnation. The balance of these elements determines how well your plant can sustain new growth.")],
                &[Span::Text("Start by identifying your plant’s natural habitat. Tropical plants thrive in indirect light and humid conditions. Succulents, on the other hand, evolved in arid climates where sunlight is intense and water is scarce. Mimicking those native conditions indoors, through lighting, soil, and humidity, makes all the difference between a struggling plant and one that grows year-round.")],
            ],
        },
        Topic {
            heading: "☀️ Light Requirements and Placement",
            paragraphs: &[
                &[
                    Span::Text("The number-one reason indoor plants decline is improper lighting. Too much direct sunlight scorches leaves; too little causes drooping and pale foliage. The solution is understanding "),
                    Span::Strong("light intensity"),
                    Span::Text(" and "),
                    Span::Strong("duration"),
                    Span::Text(". South-facing windows offer bright light, while east-facing windows provide soft morning sun ideal for medium-light species. For darker rooms, full-spectrum LED grow lights can supplement natural light."),
                ],
                &[Span::Text("Rotate your plants every two weeks to encourage even growth, and clean leaves regularly so dust doesn’t block light absorption. Light is energy, and energy fuels new shoots, roots, and blooms.")],
            ],
        },
        Topic {
            heading: "💧 Watering Techniques",
            paragraphs: &[
                &[Span::Text("Watering is where most new plant owners go wrong. Overwatering is the silent killer of houseplants because excess moisture suffocates roots. iLovePlantCare recommends the “finger test”, insert your finger one inch into the soil. If it feels dry, it’s time to water; if it’s damp, wait a few more days.")],
                &[Span::Text("Always use pots with drainage holes, and empty saucers after watering to prevent root rot. For tropical species, try bottom-watering, letting the pot absorb moisture from below. This encourages deeper root growth and reduces the risk of fungal gnats.")],
            ],
        },
        Topic {
            heading: "🌬️ Humidity and Temperature Control",
            paragraphs: &[
                &[Span::Text("Indoor heating and air conditioning can dry out the air, leaving tropical plants dehydrated. The ideal humidity range for most indoor species is 40–60%. You can raise humidity by misting leaves, using pebble trays, or grouping plants together to create a microclimate. For consistent control, a small cool-mist humidifier can maintain ideal moisture levels year-round.")],
                &[Span::Text("Temperature stability is just as important. Avoid placing plants near heaters, vents, or drafty windows. Most indoor plants prefer temperatures between 18°C and 26°C (65°F–78°F). Sudden fluctuations can cause leaf drop or shock even in resilient species.")],
            ],
        },
        Topic {
            heading: "🌱 Soil Types and Repotting Tips",
            paragraphs: &[
                &[Span::Text("Soil provides more than support, it’s a living ecosystem. Different plants require different soil textures to balance moisture retention and drainage. Succulents and cacti need sandy, fast-draining soil, while tropicals like monstera or pothos prefer rich mixes with perlite and coco coir. Orchid species do best in chunky bark blends that allow air circulation around roots.")],
                &[Span::Text("Repot every 12–18 months to refresh nutrients and prevent root crowding. Always choose a pot that’s one size larger than the current one, and never bury the plant deeper than before. After repotting, water lightly and give your plant a week to adjust before fertilizing again.")],
            ],
        },
        Topic {
            heading: "🌼 Fertilizing and Feeding",
            paragraphs: &[
                &[Span::Text("Just like humans need vitamins, plants rely on nutrients, nitrogen (N), phosphorus (P), and potassium (K), for balanced growth. A general-purpose liquid fertilizer works for most houseplants. Feed every 4–6 weeks during spring and summer when growth is active. In autumn and winter, reduce feeding frequency as most plants enter a dormant phase.")],
                &[Span::Text("Always dilute fertilizers to half strength to avoid burning the roots, and flush the soil with plain water every few months to remove mineral buildup. Organic options like compost tea or worm castings are also excellent for maintaining long-term soil health.")],
            ],
        },
        Topic {
            heading: "🐛 Pest Prevention",
            paragraphs: &[
                &[Span::Text("Even the healthiest plants can attract pests. Common culprits include spider mites, aphids, mealybugs, and fungus gnats. Regularly inspect the underside of leaves for webbing or sticky residue. Wipe leaves with a mixture of mild soap and water, or use neem oil as a natural insect deterrent. Avoid harsh chemical sprays indoors, they harm beneficial microbes and can stress sensitive plants.")],
                &[Span::Text("Prevention is easier than cure: quarantine new plants for a week before placing them with others, maintain airflow around pots, and avoid over-watering to discourage gnats and mildew.")],
            ],
        },
        Topic {
            heading: "🌾 Propagation and Growing New Plants",
            paragraphs: &[
                &[Span::Text("Propagation is one of the most rewarding parts of plant care. From a single stem cutting, you can create a new plant and expand your indoor garden. Common methods include water propagation, leaf cuttings, and division.")],
                &[Span::Text("For example, pothos and philodendron cuttings root easily in water within a few weeks. Once roots reach 2–3 inches, transfer them into soil. Succulents like echeveria can regrow from a single leaf placed on moist soil. Herbs such as mint and basil propagate well through stem cuttings in bright, indirect light.")],
            ],
        },
        Topic {
            heading: "🍂 Common Plant Problems and Quick Fixes",
            paragraphs: &[
                &[Span::Text("Yellowing leaves often mean overwatering or poor drainage. Crispy brown edges indicate low humidity or excessive sunlight. If your plant looks droopy, check for compacted roots or underwatering. Adjust slowly, plants respond best to gradual changes rather than sudden corrections.")],
                &[Span::Text("iLovePlantCare’s diagnostic library provides visual examples of leaf discoloration, spotting, or curling to help you identify the cause and correct it quickly. Many problems can be reversed with consistent care, patience, and observation.")],
            ],
        },
        Topic {
            heading: "🌻 Seasonal Plant Care Tips",
            paragraphs: &[&[Span::Text("Seasonal changes affect plant metabolism. In spring and summer, plants grow actively, this is the best time for repotting, fertilizing, and propagation. In autumn, reduce watering and move sensitive species away from cool drafts. Winter care focuses on maintaining stable humidity and avoiding cold shock from window glass. Rotate plants occasionally so all sides get light during shorter days.")]],
        },
        Topic {
            heading: "🌸 The Joy and Mindfulness of Plant Care",
            paragraphs: &[
                &[Span::Text("Beyond aesthetics, caring for plants improves mental well-being. Studies show that indoor greenery lowers stress, improves focus, and promotes a sense of accomplishment. Watering, pruning, and observing growth create a daily mindfulness ritual that reconnects you with nature even in a city apartment.")],
                &[Span::Text("iLovePlantCare promotes slow, mindful plant care, focusing on observation, balance, and appreciation. The aim isn’t perfection but connection. Plants teach patience, consistency, and awareness, turning everyday maintenance into a peaceful routine.")],
            ],
        },
    ],
    closing: &[&[Span::Text("Whether you’re just starting your indoor garden or maintaining a lush plant collection, iLovePlantCare is your trusted companion. Each guide combines practical steps, expert research, and easy-to-follow visuals so you can grow confidently, one leaf at a time.")]],
};

pub const ADVANCED_PLANT_CARE: Article = Article {
    id: "advanced-plant-care",
    heading: "Advanced Tips for Long-Term Indoor Plant Health",
    intro: &[&[Span::Text("Once your plants have adjusted to their new environment, the next step is maintaining long-term vitality. Plants are living ecosystems that change with seasons, soil quality, and light exposure. With observation and a few mindful adjustments, you can keep them thriving year after year.")]],
    topics: &[
        Topic {
            heading: "🌿 Reading the Language of Leaves",
            paragraphs: &[&[Span::Text("Leaves are a plant’s communication system. Yellowing can indicate overwatering or nutrient deficiency, brown tips often mean low humidity, while pale new leaves may signal iron or magnesium shortage. Curled or drooping foliage can point to sudden temperature stress or compacted soil. At iLovePlantCare, we recommend keeping a simple journal of leaf color and watering dates to track subtle patterns that reveal your plant’s needs.")]],
        },
        Topic {
            heading: "🌤 Adjusting to Seasonal Light Shifts",
            paragraphs: &[&[Span::Text("As seasons change, sunlight angle and intensity shift dramatically. In winter, move plants closer to windows or use grow lights for 10–12 hours of steady illumination. During summer, filter harsh sunlight with sheer curtains to prevent leaf burn. Rotating plants ensures uniform growth and prevents phototropism lean toward one side. Balanced light exposure supports even chlorophyll distribution and symmetrical foliage.")]],
        },
        Topic {
            heading: "💧 The Right Water for Your Plants",
            paragraphs: &[&[Span::Text("Tap water often contains chlorine, fluoride, or salts that can accumulate in soil over time. Sensitive species such as calatheas, ferns, and prayer plants prefer filtered or distilled water. Allow tap water to sit overnight so chlorine can evaporate before use. For mineral buildup, flush the soil monthly with rainwater or distilled water. These small changes prevent brown leaf edges and restore healthy root uptake.")]],
        },
        Topic {
            heading: "🌬 Improving Air Circulation Indoors",
            paragraphs: &[&[Span::Text("Stagnant air promotes mold and pests. Gentle airflow encourages stronger stems and healthier leaves. Keep plants a few inches apart, open windows when weather allows, or use a low-speed fan for circulation. Just ensure air doesn’t blow directly onto leaves. A well-ventilated room maintains balanced humidity and reduces the risk of mildew on soil surfaces.")]],
        },
        Topic {
            heading: "🌱 Eco-Friendly and Sustainable Plant Care",
            paragraphs: &[
                &[Span::Text("Sustainable plant care benefits both your home and the planet. Reuse nursery pots, choose biodegradable planters, and compost old soil instead of discarding it. Replace chemical fertilizers with organic compost, banana peels, or used coffee grounds, just a small layer mixed into soil improves microbial activity. Collect rainwater for irrigation whenever possible.")],
                &[Span::Text("Old leaves and trimmings can be composted to enrich future potting mixes. Choose peat-free soil blends to protect natural bog ecosystems and reduce carbon footprint. These mindful habits align perfectly with iLovePlantCare’s mission: caring for plants sustainably and respectfully.")],
            ],
        },
        Topic {
            heading: "🪴 Choosing the Right Pot and Drainage Setup",
            paragraphs: &[&[Span::Text("Pot selection influences root health more than most realize. Clay pots allow evaporation and prevent soggy soil, while plastic retains moisture longer. Self-watering planters work well for travelers but must still include an overflow hole. Always pair pots with trays to protect surfaces and prevent waterlogging. A layer of coarse gravel or perlite at the base improves drainage for moisture-sensitive plants like succulents and snake plants.")]],
        },
        Topic {
            heading: "🌸 The Role of Microbes and Mycorrhizae",
            paragraphs: &[
                &[Span::Text("Healthy soil teems with beneficial microorganisms that break down organic matter into nutrients. Using natural compost or mycorrhizal fungi inoculants supports stronger root systems and better nutrient absorption. Avoid sterilizing soil unnecessarily, living soil equals living plants.")],
                &[Span::Text("If you reuse soil, rejuvenate it with fresh compost and a pinch of slow-release fertilizer. This keeps the ecosystem active and prevents compaction or nutrient depletion over time.")],
            ],
        },
        Topic {
            heading: "🧪 Diagnosing and Reviving Unhealthy Plants",
            paragraphs: &[
                &[Span::Text("When a plant declines, start with the basics: light, water, and drainage. Remove yellow or damaged leaves, check for pests, and prune any rotted roots. If roots are mushy or smell foul, trim the damaged parts and replant in fresh, dry soil. Move the plant to bright, indirect light and mist occasionally to reduce stress. Recovery can take weeks, but most plants are resilient when given the right environment.")],
                &[Span::Text("iLovePlantCare’s recovery library includes step-by-step visual guides for common issues like drooping, browning, or stunted growth, ensuring beginners can troubleshoot confidently without panic.")],
            ],
        },
        Topic {
            heading: "🐞 Natural Pest Remedies",
            paragraphs: &[
                &[Span::Text("Neem oil, insecticidal soap, and diluted vinegar solutions can control most pests safely. Wiping leaves weekly removes dust and deters insects from nesting. Introduce beneficial predators like ladybugs in greenhouse setups to maintain ecological balance. Avoid synthetic pesticides indoors, they can harm pets and beneficial microbes.")],
                &[Span::Text("For fungus gnats, allow the top inch of soil to dry between waterings or sprinkle cinnamon powder as a natural antifungal barrier. Consistent, preventive care keeps pest populations low without harsh chemicals.")],
            ],
        },
        Topic {
            heading: "🌾 Propagation Beyond Basics",
            paragraphs: &[&[Span::Text("Advanced propagation includes layering, division, and tissue culture. While these techniques require patience, they enable rapid multiplication of favorite species. Air layering, for example, allows large plants like rubber trees to develop roots on a stem while still attached, minimizing transplant shock. Dividing root clumps rejuvenates older spider plants and ferns, encouraging fresh growth.")]],
        },
        Topic {
            heading: "🌻 Indoor Plant Styling and Placement",
            paragraphs: &[&[Span::Text("How you arrange plants influences both aesthetics and health. Combine tall, structural plants like fiddle-leaf figs with trailing vines for visual layering. Group species with similar light and watering needs to simplify maintenance. Using varied pot textures, ceramic, rattan, or terracotta, adds warmth while keeping function at the forefront. Remember: beauty follows health. A well-cared-for plant always looks good.")]],
        },
        Topic {
            heading: "🌼 The Lifecycle of Indoor Plants",
            paragraphs: &[&[Span::Text("All plants follow natural life cycles, growth, flowering, dormancy, and renewal. Understanding these phases prevents overreaction when a plant drops leaves in winter or pauses growth mid-year. Dormancy is rest, not decline. Adjust watering, reduce feeding, and let your plant conserve energy until spring returns. Patience ensures each new growth season is stronger than the last.")]],
        },
        Topic {
            heading: "🧘 The Mindful Practice of Plant Keeping",
            paragraphs: &[&[Span::Text("Caring for plants nurtures mindfulness, focus, and gratitude. Observing a new leaf unfurl or roots expand beneath soil reminds us to slow down. iLovePlantCare encourages daily micro-moments, watering mindfully, trimming consciously, and noticing small changes. These rituals turn plant care into meditation and transform ordinary routines into calm, grounding habits.")]],
        },
    ],
    closing: &[&[Span::Text("Whether you live in a compact apartment or a sunlit studio, indoor gardening invites nature into your life. With every watered leaf and every cleaned pot, you create an ecosystem of growth. iLovePlantCare is here to guide you through every stage, from your first pothos to your fiftieth fern, with trusted, easy-to-follow knowledge rooted in nature and science.")]],
};
