use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Amount in Brazilian reais, held in centavos.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Brl(u64);

impl Brl {
    pub fn from_centavos(centavos: u64) -> Self {
        Self(centavos)
    }

    pub fn from_reais(reais: u64) -> Self {
        Self(reais * 100)
    }

    pub fn centavos(&self) -> u64 {
        self.0
    }
}

impl Mul<u64> for Brl {
    type Output = Brl;

    fn mul(self, rhs: u64) -> Brl {
        Brl(self.0 * rhs)
    }
}

// R$ 1.200,00
impl fmt::Display for Brl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reais = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(reais.len() + reais.len() / 3);
        for (i, digit) in reais.chars().enumerate() {
            if i > 0 && (reais.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        write!(f, "R$ {},{:02}", grouped, self.0 % 100)
    }
}
