// src/repositories/memory.rs
//
// In-memory reference implementation of the persistence contract.
//
// The backing Vec is kept sorted by position; every mutation leaves the
// positions a contiguous 0..n-1 permutation. The RwLock protects the
// structure itself, not the engine's read-modify-write cycle (see the
// single-writer note on Catalog).

use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::Movable;
use crate::error::{AppError, AppResult};
use crate::repositories::MovableRepository;

pub struct InMemoryRepository<T: Movable> {
    items: RwLock<Vec<T>>,
}

impl<T: Movable> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, Vec<T>>> {
        self.items
            .read()
            .map_err(|_| AppError::Storage("poisoned lock".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, Vec<T>>> {
        self.items
            .write()
            .map_err(|_| AppError::Storage("poisoned lock".to_string()))
    }

    fn index_of(items: &[T], id: Option<Uuid>) -> Option<usize> {
        let id = id?;
        items.iter().position(|item| item.id() == Some(id))
    }

    fn swap_with_neighbour(items: &mut [T], index: usize, neighbour: usize) {
        let a = items[neighbour].position();
        let b = items[index].position();
        items[neighbour].set_position(b);
        items[index].set_position(a);
        items.swap(neighbour, index);
    }
}

impl<T: Movable> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Movable + Send + Sync> MovableRepository<T> for InMemoryRepository<T> {
    fn get_all(&self) -> AppResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: Uuid) -> AppResult<Option<T>> {
        Ok(self.read()?.iter().find(|item| item.id() == Some(id)).cloned())
    }

    fn add(&self, mut item: T) -> AppResult<()> {
        let mut items = self.write()?;
        item.assign_ids(&mut Uuid::new_v4);
        items.push(item);
        items.sort_by_key(|stored| stored.position());
        Ok(())
    }

    fn update(&self, mut item: T) -> AppResult<()> {
        let mut items = self.write()?;
        let index = Self::index_of(&items, item.id()).ok_or(AppError::NotFound)?;
        item.set_position(items[index].position());
        item.assign_ids(&mut Uuid::new_v4);
        items[index] = item;
        Ok(())
    }

    fn remove(&self, item: &T) -> AppResult<()> {
        let mut items = self.write()?;
        let index = Self::index_of(&items, item.id()).ok_or(AppError::NotFound)?;
        items.remove(index);
        for (position, survivor) in items.iter_mut().enumerate() {
            survivor.set_position(position as u32);
        }
        Ok(())
    }

    fn duplicate(&self, item: &T) -> AppResult<()> {
        let mut items = self.write()?;
        let index = Self::index_of(&items, item.id()).ok_or(AppError::NotFound)?;
        let mut copy = items[index].clone();
        copy.clear_ids();
        copy.assign_ids(&mut Uuid::new_v4);
        copy.set_position(items.len() as u32);
        items.push(copy);
        Ok(())
    }

    fn move_up(&self, item: &T) -> AppResult<()> {
        let mut items = self.write()?;
        let index = Self::index_of(&items, item.id()).ok_or(AppError::NotFound)?;
        if index == 0 {
            return Err(AppError::Other("item is already first".to_string()));
        }
        Self::swap_with_neighbour(&mut items, index, index - 1);
        Ok(())
    }

    fn move_down(&self, item: &T) -> AppResult<()> {
        let mut items = self.write()?;
        let index = Self::index_of(&items, item.id()).ok_or(AppError::NotFound)?;
        if index + 1 == items.len() {
            return Err(AppError::Other("item is already last".to_string()));
        }
        Self::swap_with_neighbour(&mut items, index, index + 1);
        Ok(())
    }

    fn update_positions(&self) -> AppResult<()> {
        let mut items = self.write()?;
        for (position, item) in items.iter_mut().enumerate() {
            item.set_position(position as u32);
            item.reindex_children();
        }
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.write()?.clear();
        Ok(())
    }
}
