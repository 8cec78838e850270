// ============================================================================
// Standard Ingredient Gravities
// Maximum extract per pound per gallon, as published by BYO magazine
// ============================================================================

/// `(name, max specific gravity × 1000)` for grains, sugars and extracts.
///
/// Stored in thousandths so the table stays exact; `1037` is SG 1.037.
/// A value of `0` marks an ingredient with no published extract figure.
pub(crate) const MAX_GRAVITIES: &[(&str, i64)] = &[
    ("American Black Barley", 1025),
    ("American Black Patent", 1026),
    ("American Chocolate", 1034),
    ("American Crystal 10L", 1034),
    ("American Crystal 20L", 1034),
    ("American Crystal 30L", 1034),
    ("American Crystal 40L", 1034),
    ("American Crystal 60L", 1034),
    ("American Crystal 80L", 1034),
    ("American Crystal 90L", 1034),
    ("American Crystal 120L", 1034),
    ("American Dextrin", 1033),
    ("American Munich", 1034),
    ("American Pale (2-Row)", 1037),
    ("American Pale (6-Row)", 1035),
    ("American Roasted Barley", 1025),
    ("American Special Roast", 1035),
    ("American Victory", 1034),
    ("American Vienna", 1035),
    ("American Wheat", 1038),
    ("American White Wheat", 1037),
    ("Belgian Aromatic", 1036),
    ("Belgian Pale Ale", 1038),
    ("Belgian Biscuit", 1035),
    ("Belgian Candy Sugar", 1036),
    ("Belgian Caramel Pils", 1030),
    ("Belgian Caramunich", 1033),
    ("Belgian Caravienne", 1034),
    ("Belgian Chocolate", 1033),
    ("Belgian De-Bittered Black", 1030),
    ("Belgian Pale", 1038),
    ("Belgian Pilsen", 1037),
    ("Belgian Roasted Wheat", 1036),
    ("Belgian Special B", 1030),
    ("British Amber Malt 35L", 1032),
    ("British Amber Malt 65L", 1032),
    ("British Black Patent", 1026),
    ("British Brown", 1032),
    ("British Cara-Pils Dextrin", 1033),
    ("British Caramalt", 0),
    ("British Chocolate", 1034),
    ("British Crystal", 1034),
    ("British Dark Crystal", 1034),
    ("British Lager", 1038),
    ("British Maris Otter Pale", 1038),
    ("British Mild Ale", 1037),
    ("British Oat", 1034),
    ("British Pale", 1038),
    ("British Pale Chocolate", 1034),
    ("British Peat Smoked", 1034),
    ("British Roasted Barley", 1025),
    ("British Toasted Pale", 1038),
    ("British Torrified Wheat", 1036),
    ("British Wheat", 1038),
    ("Brown Sugar", 1046),
    ("Brown Sugar (Dark)", 1046),
    ("Candi Sugar (Amber)", 1036),
    ("Candi Sugar (Dark)", 1036),
    ("Corn Sugar", 1036),
    ("Demerara Sugar", 1041),
    ("Dextrose (Glucose)", 1037),
    ("Dry Malt Extract", 1044),
    ("Flaked Barley", 1032),
    ("Flaked Maize", 1037),
    ("Flaked Oats", 1033),
    ("Flaked Rye", 1036),
    ("Flaked Wheat", 1036),
    ("Franco-Belges Kiln Coffee", 0),
    ("Gambrinus Honey Malt", 1034),
    ("German Aciduated (Sauer)", 1033),
    ("German CaraWheat", 1035),
    ("German CaraAmber", 1033),
    ("German CaraAroma", 1034),
    ("German Carafa I", 1038),
    ("German Carafa II", 1038),
    ("German Carafa III", 1038),
    ("German CaraFoam", 1033),
    ("German CaraHell", 1034),
    ("German CaraMunich I", 1034),
    ("German CaraMunich II", 1034),
    ("German CaraMunich III", 1034),
    ("German CaraRed", 1033),
    ("German Chocolate Rye", 1030),
    ("German Chocolate Wheat", 1038),
    ("German Dark Munich", 1034),
    ("German Dark Wheat", 1039),
    ("German Kolsch", 1034),
    ("German Light Munich", 1034),
    ("German Light Wheat", 1039),
    ("German Melanoidin", 1033),
    ("German Rauch Smoked", 1037),
    ("German Rye", 1029),
    ("German Vienna", 1035),
    ("Grits", 1037),
    ("Honey", 1032),
    ("Invert Sugar", 1046),
    ("Lactose", 1043),
    ("Liquid Malt Extract", 1036),
    ("Lyle's Golden Syrup", 1036),
    ("Maple Sap", 1009),
    ("Maple Syrup", 1030),
    ("Molasses", 1036),
    ("Rice Solids", 1040),
    ("Scotmalt Golden Promise", 1038),
    ("Treacle", 1036),
    ("White Table Sugar", 1046),
];
