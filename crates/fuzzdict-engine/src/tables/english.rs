// Built-in English overlay data
//
// Apostrophe-less spellings that collide with ordinary words ("were",
// "well", "hell", "shell", "shed", "wed", "lets") are left out: a key in
// this table is always reported as misspelled.

/// Apostrophe-less spelling -> canonical contracted form.
pub const CONTRACTIONS: &[(&str, &str)] = &[
    // negations
    ("cant", "can't"),
    ("wont", "won't"),
    ("dont", "don't"),
    ("isnt", "isn't"),
    ("arent", "aren't"),
    ("wasnt", "wasn't"),
    ("werent", "weren't"),
    ("hasnt", "hasn't"),
    ("havent", "haven't"),
    ("hadnt", "hadn't"),
    ("wouldnt", "wouldn't"),
    ("couldnt", "couldn't"),
    ("shouldnt", "shouldn't"),
    ("mustnt", "mustn't"),
    ("neednt", "needn't"),
    ("oughtnt", "oughtn't"),
    ("shant", "shan't"),
    ("darent", "daren't"),
    // 're / 've
    ("youre", "you're"),
    ("theyre", "they're"),
    ("youve", "you've"),
    ("theyve", "they've"),
    ("weve", "we've"),
    ("ive", "I've"),
    // 'll
    ("youll", "you'll"),
    ("theyll", "they'll"),
    ("itll", "it'll"),
    ("thatll", "that'll"),
    ("wholl", "who'll"),
    ("whatll", "what'll"),
    ("wherell", "where'll"),
    ("whenll", "when'll"),
    ("whyll", "why'll"),
    ("howll", "how'll"),
    // 'd
    ("youd", "you'd"),
    ("theyd", "they'd"),
    ("hed", "he'd"),
    ("itd", "it'd"),
    ("thatd", "that'd"),
    ("whod", "who'd"),
    ("whatd", "what'd"),
    ("whered", "where'd"),
    ("whend", "when'd"),
    ("whyd", "why'd"),
    ("howd", "how'd"),
    // 'm / 's
    ("im", "I'm"),
    ("thats", "that's"),
    ("whats", "what's"),
    ("wheres", "where's"),
    ("whens", "when's"),
    ("whys", "why's"),
    ("hows", "how's"),
    ("whos", "who's"),
    ("heres", "here's"),
    ("theres", "there's"),
];

/// Misspelled form -> intended word.
pub const COMMON_MISSPELLINGS: &[(&str, &str)] = &[
    // i before e
    ("recieve", "receive"),
    ("decieve", "deceive"),
    ("concieve", "conceive"),
    ("percieve", "perceive"),
    ("beleive", "believe"),
    ("acheive", "achieve"),
    ("releive", "relieve"),
    ("retreive", "retrieve"),
    ("breif", "brief"),
    ("cheif", "chief"),
    ("feild", "field"),
    ("yeild", "yield"),
    ("sheild", "shield"),
    ("weild", "wield"),
    ("peice", "piece"),
    ("neice", "niece"),
    ("freind", "friend"),
    ("wierd", "weird"),
    // doubled letters
    ("acommodate", "accommodate"),
    ("acomodate", "accommodate"),
    ("adress", "address"),
    ("begining", "beginning"),
    ("comittee", "committee"),
    ("comited", "committed"),
    ("embarass", "embarrass"),
    ("embarasing", "embarrassing"),
    ("goverment", "government"),
    ("harrass", "harass"),
    ("occured", "occurred"),
    ("occurence", "occurrence"),
    ("recomend", "recommend"),
    ("seperate", "separate"),
    ("sucessful", "successful"),
    ("sucess", "success"),
    ("tommorow", "tomorrow"),
    ("untill", "until"),
    // letter swaps and drops
    ("definately", "definitely"),
    ("definitly", "definitely"),
    ("diffrent", "different"),
    ("independant", "independent"),
    ("neccessary", "necessary"),
    ("occassion", "occasion"),
    ("priviledge", "privilege"),
    ("rythm", "rhythm"),
    ("suprise", "surprise"),
    ("truely", "truly"),
    ("usefull", "useful"),
    ("greatful", "grateful"),
    ("foward", "forward"),
    ("tounge", "tongue"),
    ("alot", "a lot"),
    ("alright", "all right"),
    // silent letters
    ("desparate", "desperate"),
    ("maintainance", "maintenance"),
    ("arguement", "argument"),
    ("judgement", "judgment"),
    ("acknowlege", "acknowledge"),
    ("knowlege", "knowledge"),
    ("columb", "column"),
    ("autum", "autumn"),
    ("foriegn", "foreign"),
    ("souveneir", "souvenir"),
];
