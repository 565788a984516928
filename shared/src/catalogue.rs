//! Static content: the built-in challenges, achievements and devotional texts.

use chrono::{Datelike, NaiveDate};

use crate::types::{
    Achievement, Category, Challenge, DevotionalText, Difficulty, InfoSection,
};

/// Number of nights the tracker covers.
pub const WINDOW_NIGHTS: u64 = 10;

fn challenge(
    id: i64,
    title: &str,
    description: &str,
    category: Category,
    difficulty: Difficulty,
    points: u32,
) -> Challenge {
    Challenge {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category,
        difficulty,
        points,
        is_qadr_night: difficulty == Difficulty::QadrNight,
        is_custom: false,
    }
}

/// The fixed challenge list, in display order.
pub fn builtin_challenges() -> Vec<Challenge> {
    vec![
        challenge(
            1,
            "صلاة قيام الليل",
            "صلِّ 8 ركعات من قيام الليل بعد صلاة العشاء وقبل الفجر",
            Category::Prayer,
            Difficulty::Easy,
            50,
        ),
        challenge(
            2,
            "قراءة سورة الكهف",
            "اقرأ سورة الكهف كاملة اليوم",
            Category::Quran,
            Difficulty::Medium,
            75,
        ),
        challenge(
            3,
            "تصدق على محتاج",
            "قم بالتصدق ولو بمبلغ بسيط على أحد المحتاجين",
            Category::Charity,
            Difficulty::Easy,
            50,
        ),
        challenge(
            4,
            "دعاء ليلة القدر",
            "اللهم إنك عفو تحب العفو فاعف عني",
            Category::Dhikr,
            Difficulty::QadrNight,
            100,
        ),
        challenge(
            5,
            "صلاة الضحى",
            "صلِّ صلاة الضحى من 2-8 ركعات من بعد شروق الشمس بربع ساعة حتى قبل الظهر",
            Category::Prayer,
            Difficulty::Medium,
            75,
        ),
        challenge(
            6,
            "تلاوة 5 صفحات من القرآن",
            "تلاوة 5 صفحات من القرآن بتدبر",
            Category::Quran,
            Difficulty::Easy,
            50,
        ),
        challenge(
            7,
            "الاستغفار 100 مرة",
            "قل \"استغفر الله العظيم\" 100 مرة",
            Category::Dhikr,
            Difficulty::Easy,
            50,
        ),
        challenge(
            8,
            "إطعام مسكين",
            "قم بإطعام مسكين أو المساهمة في إفطار صائم",
            Category::Charity,
            Difficulty::Medium,
            75,
        ),
        challenge(
            9,
            "حفظ آية من القرآن",
            "حفظ آية جديدة من القرآن الكريم",
            Category::Quran,
            Difficulty::Advanced,
            100,
        ),
        challenge(
            10,
            "الصلاة على النبي ﷺ",
            "صلِّ على النبي محمد ﷺ 100 مرة",
            Category::Dhikr,
            Difficulty::Easy,
            50,
        ),
    ]
}

// ============================================================================
// Achievements
// ============================================================================

fn completed_at_least_one(completed: &[i64], _total_points: u64) -> bool {
    !completed.is_empty()
}

fn completed_at_least_five(completed: &[i64], _total_points: u64) -> bool {
    completed.len() >= 5
}

fn completed_at_least_ten(completed: &[i64], _total_points: u64) -> bool {
    completed.len() >= 10
}

/// Ordered by id; the evaluator relies on it.
pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: 1,
        title: "بداية مباركة",
        description: "أكمل أول تحدي",
        points: 100,
        condition: completed_at_least_one,
    },
    Achievement {
        id: 2,
        title: "المجتهد",
        description: "أكمل 5 تحديات",
        points: 250,
        condition: completed_at_least_five,
    },
    Achievement {
        id: 3,
        title: "المثابر",
        description: "أكمل جميع التحديات",
        points: 500,
        condition: completed_at_least_ten,
    },
];

pub fn find_achievement(id: i64) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Stable choice of one item per calendar day.
pub fn pick_for_day<T>(items: &[T], date: NaiveDate) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    items.get(date.ordinal0() as usize % items.len())
}

pub fn find_text(texts: &'static [DevotionalText], id: u32) -> Option<&'static DevotionalText> {
    texts.iter().find(|t| t.id == id)
}

// ============================================================================
// Devotional Texts
// ============================================================================

pub const QURAN_DUAS: &[DevotionalText] = &[
    DevotionalText {
        id: 1,
        text: "رَبَّنَا تَقَبَّلْ مِنَّا إِنَّكَ أَنتَ السَّمِيعُ العَلِيمُ، وَتُبْ عَلَيْنَا إِنَّكَ أَنتَ التَّوَّابُ الرَّحِيمُ",
    },
    DevotionalText {
        id: 2,
        text: "رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً وَفِي الآخِرَةِ حَسَنَةً وَقِنَا عَذَابَ النَّارِ",
    },
    DevotionalText {
        id: 3,
        text: "رَبَّنَا أَفْرِغْ عَلَيْنَا صَبْرًا وَثَبِّتْ أَقْدَامَنَا وَانصُرْنَا عَلَى القَوْمِ الكَافِرِينَ",
    },
    DevotionalText {
        id: 4,
        text: "رَبَّنَا لَا تُؤَاخِذْنَا إِن نَّسِينَا أَوْ أَخْطَأْنَا، رَبَّنَا وَلَا تَحْمِلْ عَلَيْنَا إِصْرًا كَمَا حَمَلْتَهُ عَلَى الَّذِينَ مِن قَبْلِنَا",
    },
    DevotionalText {
        id: 5,
        text: "رَبَّنَا وَلَا تُحَمِّلْنَا مَا لَا طَاقَةَ لَنَا بِهِ وَاعْفُ عَنَّا وَاغْفِرْ لَنَا وَارْحَمْنَا، أَنتَ مَوْلَانَا فَانصُرْنَا عَلَى القَوْمِ الكَافِرِينَ",
    },
    DevotionalText {
        id: 6,
        text: "رَبَّنَا لَا تُزِغْ قُلُوبَنَا بَعْدَ إِذْ هَدَيْتَنَا وَهَبْ لَنَا مِن لَّدُنكَ رَحْمَةً، إِنَّكَ أَنتَ الوَهَّابُ",
    },
    DevotionalText {
        id: 7,
        text: "رَبَّنَا إِنَّكَ جَامِعُ النَّاسِ لِيَوْمٍ لَّا رَيْبَ فِيهِ، إِنَّ اللَّهَ لَا يُخْلِفُ المِيعَادَ",
    },
    DevotionalText {
        id: 8,
        text: "رَبَّنَا إِنَّنَا آمَنَّا فَاغْفِرْ لَنَا ذُنُوبَنَا وَقِنَا عَذَابَ النَّارِ",
    },
    DevotionalText {
        id: 9,
        text: "رَبِّ هَبْ لِي مِن لَّدُنكَ ذُرِّيَّةً طَيِّبَةً، إِنَّكَ سَمِيعُ الدُّعَاءِ",
    },
    DevotionalText {
        id: 10,
        text: "رَبَّنَا آمَنَّا بِمَا أَنزَلْتَ وَاتَّبَعْنَا الرَّسُولَ فَاكْتُبْنَا مَعَ الشَّاهِدِينَ",
    },
    DevotionalText {
        id: 11,
        text: "رَبَّنَا اغْفِرْ لَنَا ذُنُوبَنَا وَإِسْرَافَنَا فِي أَمْرِنَا وَثَبِّتْ أَقْدَامَنَا وَانصُرْنَا عَلَى القَوْمِ الكَافِرِينَ",
    },
    DevotionalText {
        id: 12,
        text: "رَبَّنَا مَا خَلَقْتَ هَذَا بَاطِلًا، سُبْحَانَكَ فَقِنَا عَذَابَ النَّارِ",
    },
    DevotionalText {
        id: 13,
        text: "رَبَّنَا إِنَّكَ مَن تُدْخِلِ النَّارَ فَقَدْ أَخْزَيْتَهُ، وَمَا لِلظَّالِمِينَ مِنْ أَنصَارٍ",
    },
    DevotionalText {
        id: 14,
        text: "رَبَّنَا إِنَّنَا سَمِعْنَا مُنَادِيًا يُنَادِي لِلإِيمَانِ أَنْ آمِنُوا بِرَبِّكُمْ فَآمَنَّا، رَبَّنَا فَاغْفِرْ لَنَا ذُنُوبَنَا وَكَفِّرْ عَنَّا سَيِّئَاتِنَا وَتَوَفَّنَا مَعَ الأَبْرَارِ",
    },
    DevotionalText {
        id: 15,
        text: "رَبَّنَا وَآتِنَا مَا وَعَدتَّنَا عَلَى رُسُلِكَ وَلَا تُخْزِنَا يَوْمَ القِيَامَةِ، إِنَّكَ لَا تُخْلِفُ المِيعَادَ",
    },
    DevotionalText {
        id: 16,
        text: "رَبَّنَا أَخْرِجْنَا مِنْ هَذِهِ القَرْيَةِ الظَّالِمِ أَهْلُهَا، وَاجْعَلْ لَنَا مِن لَّدُنكَ وَلِيًّا وَاجْعَلْ لَنَا مِن لَّدُنكَ نَصِيرًا",
    },
    DevotionalText {
        id: 17,
        text: "رَبَّنَا ظَلَمْنَا أَنفُسَنَا، وَإِن لَّمْ تَغْفِرْ لَنَا وَتَرْحَمْنَا لَنَكُونَنَّ مِنَ الخَاسِرِينَ",
    },
    DevotionalText {
        id: 18,
        text: "رَبَّنَا افْتَحْ بَيْنَنَا وَبَيْنَ قَوْمِنَا بِالحَقِّ، وَأَنتَ خَيْرُ الفَاتِحِينَ",
    },
    DevotionalText {
        id: 19,
        text: "رَبَّنَا أَفْرِغْ عَلَيْنَا صَبْرًا وَتَوَفَّنَا مُسْلِمِينَ",
    },
    DevotionalText {
        id: 20,
        text: "رَبَّنَا لَا تَجْعَلْنَا فِتْنَةً لِّلْقَوْمِ الظَّالِمِينَ، وَنَجِّنَا بِرَحْمَتِكَ مِنَ القَوْمِ الكَافِرِينَ",
    },
    DevotionalText {
        id: 21,
        text: "رَبِّ إِنِّي أَعُوذُ بِكَ أَنْ أَسْأَلَكَ مَا لَيْسَ لِي بِهِ عِلْمٌ، وَإِلَّا تَغْفِرْ لِي وَتَرْحَمْنِي أَكُن مِّنَ الخَاسِرِينَ",
    },
    DevotionalText {
        id: 22,
        text: "رَبِّ أَنتَ وَلِيِّي فِي الدُّنْيَا وَالآخِرَةِ، تَوَفَّنِي مُسْلِمًا وَأَلْحِقْنِي بِالصَّالِحِينَ",
    },
    DevotionalText {
        id: 23,
        text: "رَبَّنَا إِنَّكَ تَعْلَمُ مَا نُخْفِي وَمَا نُعْلِنُ، وَمَا يَخْفَى عَلَى اللَّهِ مِنْ شَيْءٍ فِي الأَرْضِ وَلَا فِي السَّمَاءِ",
    },
    DevotionalText {
        id: 24,
        text: "رَبِّ اجْعَلْنِي مُقِيمَ الصَّلَاةِ وَمِن ذُرِّيَّتِي، رَبَّنَا وَتَقَبَّلْ دُعَاءِ، رَبَّنَا اغْفِرْ لِي وَلِوَالِدَيَّ وَلِلْمُؤْمِنِينَ يَوْمَ يَقُومُ الحِسَابُ",
    },
    DevotionalText {
        id: 25,
        text: "رَبِّ أَدْخِلْنِي مُدْخَلَ صِدْقٍ وَأَخْرِجْنِي مُخْرَجَ صِدْقٍ، وَاجْعَلْ لِي مِن لَّدُنكَ سُلْطَانًا نَّصِيرًا",
    },
    DevotionalText {
        id: 26,
        text: "رَبَّنَا آتِنَا مِن لَّدُنكَ رَحْمَةً، وَهَيِّئْ لَنَا مِنْ أَمْرِنَا رَشَدًا",
    },
    DevotionalText {
        id: 27,
        text: "رَبِّ اشْرَحْ لِي صَدْرِي، وَيَسِّرْ لِي أَمْرِي، وَاحْلُلْ عُقْدَةً مِن لِسَانِي، يَفْقَهُوا قَوْلِي",
    },
    DevotionalText {
        id: 28,
        text: "لَا إِلَهَ إِلَّا أَنتَ، سُبْحَانَكَ إِنِّي كُنتُ مِنَ الظَّالِمِينَ",
    },
    DevotionalText {
        id: 29,
        text: "رَبِّ لَا تَذَرْنِي فَرْدًا وَأَنتَ خَيْرُ الوَارِثِينَ",
    },
    DevotionalText {
        id: 30,
        text: "إِنِّي مَسَّنِيَ الضُّرُّ وَأَنتَ أَرْحَمُ الرَّاحِمِينَ",
    },
    DevotionalText {
        id: 31,
        text: "رَبِّ أَنزِلْنِي مُنزَلًا مُّبَارَكًا، وَأَنتَ خَيْرُ المُنزِلِينَ",
    },
    DevotionalText {
        id: 32,
        text: "رَبِّ أَعُوذُ بِكَ مِنْ هَمَزَاتِ الشَّيَاطِينِ وَأَعُوذُ بِكَ رَبِّ أَن يَحْضُرُونِ",
    },
    DevotionalText {
        id: 33,
        text: "رَبَّنَا آمَنَّا فَاغْفِرْ لَنَا وَارْحَمْنَا وَأَنتَ خَيْرُ الرَّاحِمِينَ",
    },
    DevotionalText {
        id: 34,
        text: "رَبَّنَا اصْرِفْ عَنَّا عَذَابَ جَهَنَّمَ إِنَّ عَذَابَهَا كَانَ غَرَامًا، إِنَّهَا سَاءَتْ مُسْتَقَرًّا وَمُقَامًا",
    },
    DevotionalText {
        id: 35,
        text: "رَبَّنَا هَبْ لَنَا مِنْ أَزْوَاجِنَا وَذُرِّيَّاتِنَا قُرَّةَ أَعْيُنٍ وَاجْعَلْنَا لِلْمُتَّقِينَ إِمَامًا",
    },
    DevotionalText {
        id: 36,
        text: "رَبِّ هَبْ لِي حُكْمًا وَأَلْحِقْنِي بِالصَّالِحِينَ، وَاجْعَلْ لِي لِسَانَ صِدْقٍ فِي الْآخِرِينَ، وَاجْعَلْنِي مِنْ وَرَثَةِ جَنَّةِ النَّعِيمِ، وَلَا تُخْزِنِي يَوْمَ يُبْعَثُونَ، يَوْمَ لَا يَنفَعُ مَالٌ وَلَا بَنُونَ، إِلَّا مَنْ أَتَى اللَّهَ بِقَلْبٍ سَلِيمٍ",
    },
    DevotionalText {
        id: 37,
        text: "رَبِّ نَجِّنِي وَأَهْلِي مِمَّا يَعْمَلُونَ",
    },
    DevotionalText {
        id: 38,
        text: "رَبِّ أَوْزِعْنِي أَنْ أَشْكُرَ نِعْمَتَكَ الَّتِي أَنْعَمْتَ عَلَيَّ وَعَلَىٰ وَالِدَيَّ وَأَنْ أَعْمَلَ صَالِحًا تَرْضَاهُ وَأَدْخِلْنِي بِرَحْمَتِكَ فِي عِبَادِكَ الصَّالِحِينَ",
    },
    DevotionalText {
        id: 39,
        text: "رَبِّ إِنِّي ظَلَمْتُ نَفْسِي فَاغْفِرْ لِي، رَبِّ انْصُرْنِي عَلَى الْقَوْمِ الْمُفْسِدِينَ",
    },
    DevotionalText {
        id: 40,
        text: "رَبَّنَا وَسِعْتَ كُلَّ شَيْءٍ رَحْمَةً وَعِلْمًا فَاغْفِرْ لِلَّذِينَ تَابُوا وَاتَّبَعُوا سَبِيلَكَ وَقِهِمْ عَذَابَ الْجَحِيمِ",
    },
    DevotionalText {
        id: 41,
        text: "رَبَّنَا وَأَدْخِلْهُمْ جَنَّاتِ عَدْنٍ الَّتِي وَعَدْتَّهُمْ وَمَنْ صَلَحَ مِن آبَائِهِمْ وَأَزْوَاجِهِمْ وَذُرِّيَّاتِهِمْ، إِنَّكَ أَنتَ الْعَزِيزُ الْحَكِيمُ، وَقِهِمُ السَّيِّئَاتِ، وَمَن تَقِ السَّيِّئَاتِ يَوْمَئِذٍ فَقَدْ رَحِمْتَهُ، وَذَٰلِكَ هُوَ الْفَوْزُ الْعَظِيمُ",
    },
    DevotionalText {
        id: 42,
        text: "رَبَّنَا اكْشِفْ عَنَّا الْعَذَابَ إِنَّا مُؤْمِنُونَ",
    },
    DevotionalText {
        id: 43,
        text: "أَوْزِعْنِي أَنْ أَشْكُرَ نِعْمَتَكَ الَّتِي أَنْعَمْتَ عَلَيَّ وَعَلَىٰ وَالِدَيَّ وَأَنْ أَعْمَلَ صَالِحًا تَرْضَاهُ وَأَصْلِحْ لِي فِي ذُرِّيَّتِي، إِنِّي تُبْتُ إِلَيْكَ وَإِنِّي مِنَ الْمُسْلِمِينَ",
    },
    DevotionalText {
        id: 44,
        text: "رَبَّنَا اغْفِرْ لَنَا وَلِإِخْوَانِنَا الَّذِينَ سَبَقُونَا بِالْإِيمَانِ وَلَا تَجْعَلْ فِي قُلُوبِنَا غِلًّا لِلَّذِينَ آمَنُوا",
    },
    DevotionalText {
        id: 45,
        text: "رَبَّنَا إِنَّكَ رَءُوفٌ رَحِيمٌ، رَبَّنَا عَلَيْكَ تَوَكَّلْنَا وَإِلَيْكَ أَنَبْنَا وَإِلَيْكَ الْمَصِيرُ، رَبَّنَا لَا تَجْعَلْنَا فِتْنَةً لِلَّذِينَ كَفَرُوا وَاغْفِرْ لَنَا، رَبَّنَا إِنَّكَ أَنتَ الْعَزِيزُ الْحَكِيمُ",
    },
    DevotionalText {
        id: 46,
        text: "رَبَّنَا أَتْمِمْ لَنَا نُورَنَا وَاغْفِرْ لَنَا، إِنَّكَ عَلَىٰ كُلِّ شَيْءٍ قَدِيرٌ، رَبِّ ابْنِ لِي عِندَكَ بَيْتًا فِي الْجَنَّةِ وَنَجِّنِي مِنَ الْقَوْمِ الظَّالِمِينَ",
    },
    DevotionalText {
        id: 47,
        text: "رَبِّ لَا تَذَرْ عَلَى الْأَرْضِ مِنَ الْكَافِرِينَ دَيَّارًا، إِنَّكَ إِن تَذَرْهُمْ يُضِلُّوا عِبَادَكَ وَلَا يَلِدُوا إِلَّا فَاجِرًا كَفَّارًا",
    },
    DevotionalText {
        id: 48,
        text: "رَبِّ اغْفِرْ لِي وَلِوَالِدَيَّ وَلِمَن دَخَلَ بَيْتِيَ مُؤْمِنًا وَلِلْمُؤْمِنِينَ وَالْمُؤْمِنَاتِ وَلَا تَزِدِ الظَّالِمِينَ إِلَّا تَبَارًا",
    },
];

pub const WASAYA: &[DevotionalText] = &[
    DevotionalText {
        id: 1,
        text: "•• الوصية الأولى💜\nصلي كل ليلة قيام الليل ولو ركعتين بمائة آية؛\nفإن وافقت صلاتك ليلة القدر كتب عند الله تعالى من القانتين يوميا لمدة 84 سنة! لقول النبي صلى الله عليه وسلم: (من قام بمائة آية كتب من القانتين، ومن قام بألف آية كتب من المقنطرين) صححه الألباني",
    },
    DevotionalText {
        id: 2,
        text: "•• الوصية الثانية💜\nاقرأ كل ليلة (سورة الإخلاص) 3 مرات؛ فإن وافقت قراءتك ليلة القدر كنت كمن قرأ القرآن الكريم كاملا يوميا لمدة 84 سنة، لقول النبي صلى الله عليه وسلم: (أَيَعْجِزُ أَحَدُكُمْ أَنْ يَقْرَأَ فِي لَيْلَةٍ ثُلُثَ الْقُرْآنِ ؟ قَالُوا : وَكَيْفَ يَقْرَأْ ثُلُثَ الْقُرْآنِ، قَالَ : قُلْ هُوَ اللَّهُ أَحَدٌ تَعْدِلُ ثُلُثَ الْقُرْآنِ) صحيح مسلم",
    },
    DevotionalText {
        id: 3,
        text: "•• الوصية الثالثة💜\nقراءة خواتيم سورة البقرة (لله ما في السماوات وما في الأرض..) فإن وافقت ليلة القدر؛ فقد كتب لك قيام 30000 ثلاثين ألف ليلة، لقول النبي صلى الله عليه وسلم: ( من قرأ هاتين الآيتين من آخر سورة البقرة في ليلة كفتاه)*رواه مسلم، وقال ابن حجر: *كفتاه: يعني: أجزأتاه عن قيام الليل، وقيل: غير ذلك",
    },
    DevotionalText {
        id: 4,
        text: "•• الوصية الرابعة💜\nتصدق كل ليلة ولو بصدقة واحدة فإن وافقت ليلة القدر كنت كمن تصدق يوميا لمدة 84 سنة!",
    },
    DevotionalText {
        id: 5,
        text: "•• الوصية الخامسة💜\nاحرص على هذا الذكر: (لا إله إلا الله وحده لا شريك له له الملك وله الحمد وهو على كل شيء قدير) 100مرة\nفإن وافقت ليلة القدر كنت كمن أعتق 300000 ألف رقبة، والرقبة الواحدة تعتق من النار، لقول النبي صلى الله عليه وسلم في الحديث الصحيح: *(أَيُّمَا امْرِئٍ مُسْلِمٍ أَعْتَقَ امْرَأً مُسْلِمًا، اسْتَنْقَذَ اللَّهُ بِكُلِّ عُضْوٍ مِنْهُ عُضْوًا مِنْهُ مِنَ النَّارِ) \nمُتَّفَقٌ عَلَيْهِ",
    },
    DevotionalText {
        id: 6,
        text: "•• الوصية السادسة💜\nقل: (لا إله إلا الله وحده لا شريك له، الله أكبر كبيرا، والحمد لله كثيرا، سبحان الله رب العالمين، لا حول ولا قوة إلا بالله العزيز الحكيم) ثم قل: (اللهم اغفر لي، وارحمني، واهدني، وارزقني) فإن وافقت ليلة القدر؛ فقد ملأت يدك من الخير لمدة 30000 ثلاثون ألف يوما.",
    },
    DevotionalText {
        id: 7,
        text: "•• الوصية السابعة💜\nقل: (اللهم اغفر للمؤمنين والمؤمنات) \nفإن وافقت ليلة القدر؛ فقد كتب لك *60000000000000 ستين بليون حسنة؛ لقول النبي صلى الله عليه وسلم:\n (من استغفر للمؤمنين والمؤمنات كتب الله له بكل مؤمن ومؤمنة حسنة) \nحسّنه الألباني",
    },
    DevotionalText {
        id: 8,
        text: "•• الوصية الثامنة💜\nقل: (سبحان الله) 100مرة\n فإن وافقت ليلة القدر يكتب لك 30,000,000 ثلاثين مليون حسنة، أو تحط عنك ثلاثين مليون خطيئة؛\nلقول النبي صلى الله عليه وسلم:\n (أيعجز أحدكم أن يكسب كل يوم ألف حسنة، فسأله سائل من جلسائه: كيف يكسب أحدنا ألف حسنة؟ قال: يسبح مائة تسبيحة، فيكتب له ألف حسنة أو يحط عنه ألف خطيئة) رواه مسلم",
    },
    DevotionalText {
        id: 9,
        text: "•• الوصية التاسعة💜\nاحرص على قول : (سبحان الله العظيم وبحمده) 100مرة\n فإن وافقت ليلة القدر يكتب لك 3,000,000 ثلاثة ملايين نخلة في الجنة، لقول النبي صلى الله عليه وسلم: \n(من قال سبحان الله العظيم وبحمده غرست له نخلة في الجنة)\n صححه الألباني",
    },
    DevotionalText {
        id: 10,
        text: "•• الوصية العاشرة💜\nقل: (اللهم صل على محمد وآل محمد) 100مرة\n فإن وافقت ليلة القدر يكتب لك 3,000,000 ثلاثة ملايين رحمة من ملك الملوك ، لقول النبي صلى الله عليه وسلم: \n(مَنْ صَلَّى عَلَيَّ وَاحِدَةً صَلَّى الله عَلَيْهِ عَشْرًا)*رواه مسلم؛ وقال الشوكاني: *المراد بالصلاة من الله الرحمة لعباده، وأنه يرحمهم رحمة بعد رحمة؛ حتى تبلغ رحمته ذلك العدد",
    },
    DevotionalText {
        id: 11,
        text: "•• الوصية الحادية عشر💜\nقل: (سبحان اللهِ عدَدَ ما خلق... والحمد للهِ مِلْءَ كلِّ شيءٍ)\n *فإن وافقت ليلة القدر؛ كان أفضل من ذكرك الليل مع النهار لمدة 30000 ثلاثون ألف يوما.",
    },
    DevotionalText {
        id: 12,
        text: "•• الوصية الثانية عشر💜\nقول: لا حول ولا قوة إلا بالله 100 مرة؛ فإن وافقت ليلة القدر يكتب لك 3,000,000 ثلاثة ملايين كنز في الجنة.",
    },
];

pub const DAILY_DUAS: &[&str] = &[
    "اللهم إني أسألك الجنة وما قرب إليها من قول وعمل، وأعوذ بك من النار وما قرب إليها من قول وعمل",
    "اللهم إنك عفو تحب العفو فاعف عني",
    "ربنا آتنا في الدنيا حسنة وفي الآخرة حسنة وقنا عذاب النار",
];

pub const DAILY_TIPS: &[&str] = &[
    "حاول أن تكثر من قراءة القرآن وختمه في هذه الأيام المباركة، فإن للقرآن شفاعة يوم القيامة.",
    "اجتهد في قيام الليل، فإنه من أفضل العبادات في العشر الأواخر.",
    "أكثر من الدعاء في السجود، فإنه أقرب ما يكون العبد من ربه وهو ساجد.",
];

pub const QADR_NIGHT_INFO: &[InfoSection] = &[
    InfoSection {
        title: "علامات ليلة القدر",
        points: &[
            "أن يكون الجو معتدلا والريح ساكنة - فعن ابن عباس قال - قال رسول الله صلى الله عليه وسلم - ليلة القدر ليلة سمحة، طلقة، لا حارة ولا باردة، تصبح الشمس صبيحتها ضعيفة حمراء",
            "قوة الإضاءة والنور في تلك الليلة",
            "طمأنينة القلب",
            "انشراح الصدر من المسلم",
            "الرياح تكون فيها ساكنة",
        ],
    },
    InfoSection {
        title: "أفضل الأعمال فى العشر الاواخر",
        points: &[
            "صلاة الفرائض الخمس بالمسجد",
            "صلاة السنن لان السنة في رمضان باجر فرض",
            "قيام الليل والتهجد",
            "قراءة القرآن وختمه",
            "إخراج صدقة كل يوم لعل يوم اخراجها يوافق ليلة القدر فتكون تصدقت لمدة ٨٤ عام",
            "الدعاء والذكر وخاصة لأهل غزة",
            "الاعتكاف في المسجد",
        ],
    },
];
