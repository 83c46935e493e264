use serde::{Deserialize, Serialize};

use crate::{
  fatal::{self, InvariantViolation},
  IrType, Temp,
};

/// One `(temporary, type)` entry of a [`TypeEnv`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Maplet {
  pub tmp: Temp,
  pub ty: IrType,
}

/// Append-only, insertion-ordered map from temporaries to their types.
///
/// Lookup scans from the front, so when a temporary is inserted twice the
/// first type is the one every lookup sees. Later entries for the same
/// temporary stay in the map (and are printed) but are never returned.
///
/// Capacity is tracked here rather than left to `Vec`: it starts at 0 and
/// grows to `max(8, 2 * capacity)` whenever an insert finds the map full.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Maplet>", into = "Vec<Maplet>")]
pub struct TypeEnv {
  map: Vec<Maplet>,
  map_size: usize,
}

impl TypeEnv {
  pub fn new() -> Self {
    Self {
      map: Vec::new(),
      map_size: 0,
    }
  }

  /// Append `tmp: ty`. No duplicate check.
  pub fn insert(
    &mut self,
    tmp: Temp,
    ty: IrType,
  ) {
    debug_assert!(self.map.len() <= self.map_size);

    if self.map.len() == self.map_size {
      self.grow();
    }

    self.map.push(Maplet { tmp, ty });
  }

  /// Type of the first maplet naming `tmp`. Aborts if there is none.
  pub fn lookup(
    &self,
    tmp: Temp,
  ) -> IrType {
    match self.map.iter().find(|m| m.tmp == tmp) {
      Some(maplet) => maplet.ty,
      None => fatal::abort(InvariantViolation::UnboundTemp { tmp }),
    }
  }

  /// Register a fresh temporary of type `ty`, numbered one past the highest
  /// temporary already in the map. Aborts once `t4294967295` is taken.
  pub fn new_temp(
    &mut self,
    ty: IrType,
  ) -> Temp {
    let next = match self.map.iter().map(|m| m.tmp.0).max() {
      None => 0,
      Some(highest) => match highest.checked_add(1) {
        Some(next) => next,
        None => fatal::abort(InvariantViolation::ExhaustedTemps),
      },
    };
    let tmp = Temp(next);
    self.insert(tmp, ty);
    tmp
  }

  pub fn len(&self) -> usize {
    self.map.len()
  }

  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }

  pub fn capacity(&self) -> usize {
    self.map_size
  }

  pub fn iter(&self) -> impl Iterator<Item = &Maplet> {
    self.map.iter()
  }

  fn grow(&mut self) {
    let new_size = (2 * self.map_size).max(8);
    let mut new_map = Vec::with_capacity(new_size);
    new_map.append(&mut self.map);

    self.map = new_map;
    self.map_size = new_size;
  }
}

impl Default for TypeEnv {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Vec<Maplet>> for TypeEnv {
  fn from(maplets: Vec<Maplet>) -> Self {
    let mut env = TypeEnv::new();
    for maplet in maplets {
      env.insert(maplet.tmp, maplet.ty);
    }
    env
  }
}

impl From<TypeEnv> for Vec<Maplet> {
  fn from(env: TypeEnv) -> Self {
    env.map
  }
}
