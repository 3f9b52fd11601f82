//! Constantes de l'ellipsoïde et des formules de décalage
//!
//! Les valeurs sont celles de l'implémentation de référence largement diffusée :
//! les modifier, même d'un ulp, casse l'interopérabilité avec les autres outils.

/// Ellipsoïde de Krassovsky (base du modèle GCJ-02)
pub struct Krasovsky;

impl Krasovsky {
    /// Demi-grand axe en mètres
    pub const A: f64 = 6378245.0;

    /// Première excentricité au carré
    #[allow(clippy::excessive_precision)]
    pub const EE: f64 = 0.00669342162296594323;
}

/// Rayon terrestre utilisé par les conversions et la distance haversine (mètres)
///
/// Attention : ce n'est pas le rayon moyen WGS84.
pub const EARTH_RADIUS: f64 = Krasovsky::A;

/// Première excentricité au carré
pub const EE: f64 = Krasovsky::EE;

/// π tel qu'écrit dans les formules de référence
#[allow(clippy::excessive_precision, clippy::approx_constant)]
pub const PI: f64 = 3.1415926535897932384626;

/// Facteur angulaire de la transformation BD-09
pub const X_PI: f64 = std::f64::consts::PI * 3000.0 / 180.0;

/// Centre de référence (longitude) du modèle de décalage
pub const CENTER_LNG: f64 = 105.0;

/// Centre de référence (latitude) du modèle de décalage
pub const CENTER_LAT: f64 = 35.0;

/// Biais fixe en longitude entre GCJ-02 et BD-09
pub const BD_LNG_BIAS: f64 = 0.0065;

/// Biais fixe en latitude entre GCJ-02 et BD-09
pub const BD_LAT_BIAS: f64 = 0.006;
